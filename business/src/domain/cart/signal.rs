use tokio::sync::mpsc;

/// Cross-component notifications a cart session listens for. Fire-and-forget:
/// no payload, no acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartSignal {
    ToggleVisibility,
}

/// Creates the explicit channel connecting presentation components to one
/// cart session. Senders clone freely; the session owns the receiving half.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SignalSender { tx }, SignalReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: mpsc::UnboundedSender<CartSignal>,
}

impl SignalSender {
    /// Sends without waiting for delivery. A dropped receiver is ignored.
    pub fn emit(&self, signal: CartSignal) {
        let _ = self.tx.send(signal);
    }
}

#[derive(Debug)]
pub struct SignalReceiver {
    rx: mpsc::UnboundedReceiver<CartSignal>,
}

impl SignalReceiver {
    /// Pops the next pending signal without blocking.
    pub fn try_next(&mut self) -> Option<CartSignal> {
        self.rx.try_recv().ok()
    }
}
