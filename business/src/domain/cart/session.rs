use std::sync::Arc;

use uuid::Uuid;

use crate::domain::cart::model::{CartEntry, CartState};
use crate::domain::cart::signal::{CartSignal, SignalReceiver, SignalSender, signal_channel};
use crate::domain::cart::store::CartStore;
use crate::domain::food::model::Food;
use crate::domain::logger::Logger;

/// The cart engine for one user session: an explicitly owned state container
/// wiring `CartState` to its snapshot store and signal channel. No ambient
/// globals; whoever owns the session passes it down.
pub struct CartSession {
    state: CartState,
    store: Arc<dyn CartStore>,
    logger: Arc<dyn Logger>,
    signals: SignalReceiver,
}

impl CartSession {
    /// Restores the persisted cart and returns the session together with the
    /// sender half of its signal channel.
    pub fn start(store: Arc<dyn CartStore>, logger: Arc<dyn Logger>) -> (Self, SignalSender) {
        let (tx, rx) = signal_channel();
        let state = store.load();
        let session = Self {
            state,
            store,
            logger,
            signals: rx,
        };
        (session, tx)
    }

    pub fn add_item(&mut self, item: Food) {
        self.state.add_item(item);
        self.persist();
    }

    pub fn remove_item(&mut self, id: Uuid) {
        self.state.remove_item(id);
        self.persist();
    }

    pub fn set_quantity(&mut self, item: &Food, quantity: u32) {
        self.state.set_quantity(item, quantity);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
    }

    // Visibility is session-only state; the snapshot excludes the flag, so
    // none of these persist.
    pub fn toggle_visibility(&mut self) {
        self.state.toggle_visibility();
    }

    pub fn open(&mut self) {
        self.state.open();
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    /// Applies every signal currently pending on the channel.
    pub fn pump_signals(&mut self) {
        while let Some(signal) = self.signals.try_next() {
            match signal {
                CartSignal::ToggleVisibility => self.state.toggle_visibility(),
            }
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        self.state.entries()
    }

    pub fn total_item_count(&self) -> u64 {
        self.state.total_item_count()
    }

    pub fn total_price(&self) -> u64 {
        self.state.total_price()
    }

    pub fn quantity_of(&self, id: Uuid) -> u32 {
        self.state.quantity_of(id)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            self.logger
                .warn(&format!("Failed to persist cart snapshot: {}", e));
        }
    }
}
