use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::cart::model::{CartEntry, CartState};
use business::domain::food::model::Food;
use business::domain::food::value_objects::Category;
use business::domain::shared::value_objects::Price;

/// Current snapshot schema version. Bump on breaking field changes; a
/// snapshot carrying any other version is treated as absent.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub version: u32,
    pub entries: Vec<CartEntrySnapshot>,
}

/// Field-for-field copy of a cart entry: the food as it looked when added,
/// plus the chosen quantity. The visibility flag is session state and is
/// deliberately not part of the snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartEntrySnapshot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cuisine: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub quantity: u32,
}

impl CartSnapshot {
    pub fn from_state(state: &CartState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            entries: state
                .entries()
                .iter()
                .map(CartEntrySnapshot::from_entry)
                .collect(),
        }
    }

    /// Rebuilds the cart state. Any entry that no longer parses (unknown
    /// category, zero quantity) invalidates the whole snapshot; the caller
    /// treats that exactly like an absent cart.
    pub fn into_state(self) -> Option<CartState> {
        if self.version != SNAPSHOT_VERSION {
            return None;
        }
        let mut entries = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            entries.push(entry.into_entry()?);
        }
        Some(CartState::from_entries(entries))
    }
}

impl CartEntrySnapshot {
    fn from_entry(entry: &CartEntry) -> Self {
        Self {
            id: entry.item.id,
            name: entry.item.name.clone(),
            description: entry.item.description.clone(),
            price: entry.item.price.minor_units(),
            category: entry.item.category.to_string(),
            kind: entry.item.kind.clone(),
            cuisine: entry.item.cuisine.clone(),
            image: entry.item.image.clone(),
            created_at: entry.item.created_at,
            updated_at: entry.item.updated_at,
            quantity: entry.quantity,
        }
    }

    fn into_entry(self) -> Option<CartEntry> {
        if self.quantity == 0 {
            return None;
        }
        let category = self.category.parse::<Category>().ok()?;
        Some(CartEntry {
            item: Food::from_repository(
                self.id,
                self.name,
                self.description,
                Price::new(self.price),
                category,
                self.kind,
                self.cuisine,
                self.image,
                self.created_at,
                self.updated_at,
            ),
            quantity: self.quantity,
        })
    }
}
