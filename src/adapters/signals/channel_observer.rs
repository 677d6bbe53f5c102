//! Channel Observer - forwards session notifications over a tokio channel.
//!
//! The controller notifies synchronously; whoever owns the results panel
//! drains the receiver and applies each signal in order.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ports::{SessionObserver, SessionSignal};

#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: UnboundedSender<SessionSignal>,
}

impl ChannelObserver {
    /// Creates an observer and the receiving end of its signals.
    pub fn new() -> (Self, UnboundedReceiver<SessionSignal>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn forward(&self, signal: SessionSignal) {
        if self.sender.send(signal).is_err() {
            tracing::debug!("Session signal dropped: receiver closed");
        }
    }
}

impl SessionObserver for ChannelObserver {
    fn dataset_loaded(&self, columns: &[String]) {
        self.forward(SessionSignal::DatasetLoaded(columns.to_vec()));
    }

    fn session_reset(&self) {
        self.forward(SessionSignal::Reset);
    }
}
