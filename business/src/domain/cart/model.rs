use uuid::Uuid;

use crate::domain::food::model::Food;

/// One selected food plus how many of it the user wants.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// Copy of the food taken at add time; never re-validated against the
    /// catalog, so a later catalog edit or delete leaves the entry as-is.
    pub item: Food,
    pub quantity: u32,
}

/// Session-local cart: the ordered selection of foods plus the panel
/// visibility flag.
///
/// Every operation is a synchronous, total transformation of the whole state.
/// There is exactly one writer context per cart, so nothing here locks.
///
/// Invariants:
/// - an entry's quantity is at least 1; reaching 0 removes the entry
/// - at most one entry per food id
/// - entries keep insertion order, first added first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    entries: Vec<CartEntry>,
    is_open: bool,
}

impl CartState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted entries. Zero-quantity entries and
    /// duplicate ids (first occurrence wins) are dropped to restore the
    /// invariants.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Self::empty();
        for entry in entries {
            if entry.quantity == 0 || cart.position_of(entry.item.id).is_some() {
                continue;
            }
            cart.entries.push(entry);
        }
        cart
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Increments the quantity for an already-selected food, or appends a new
    /// entry with quantity 1. Never fails; the catalog owns item validity.
    pub fn add_item(&mut self, item: Food) {
        match self.position_of(item.id) {
            Some(index) => self.entries[index].quantity += 1,
            None => self.entries.push(CartEntry { item, quantity: 1 }),
        }
    }

    /// Removes the entry for `id`. A missing id is a no-op, not an error.
    pub fn remove_item(&mut self, id: Uuid) {
        self.entries.retain(|entry| entry.item.id != id);
    }

    /// Sets the exact quantity for a food, snapshotting `item` if it was not
    /// selected yet. Quantity 0 behaves exactly like `remove_item`, so an
    /// entry can never linger at zero.
    pub fn set_quantity(&mut self, item: &Food, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item.id);
            return;
        }
        match self.position_of(item.id) {
            Some(index) => self.entries[index].quantity = quantity,
            None => self.entries.push(CartEntry {
                item: item.clone(),
                quantity,
            }),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn total_item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Order total in minor units.
    pub fn total_price(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.item.price.total_for(entry.quantity))
            .sum()
    }

    pub fn quantity_of(&self, id: Uuid) -> u32 {
        self.position_of(id)
            .map(|index| self.entries[index].quantity)
            .unwrap_or(0)
    }

    pub fn toggle_visibility(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    fn position_of(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.item.id == id)
    }
}
