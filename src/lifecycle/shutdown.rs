//! Shutdown coordination for the gateway.
//!
//! `main` owns one `Shutdown`; the HTTP server receives a subscription and
//! stops accepting connections once it fires. Integration tests trigger it
//! directly instead of sending Ctrl+C.

use tokio::sync::broadcast;

pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Only receivers created before `trigger` see the signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    // No subscribers is fine: nothing is running yet.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
