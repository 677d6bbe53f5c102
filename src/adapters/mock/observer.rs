//! Observer that records notifications.

use std::sync::{Arc, Mutex};

use crate::domain::chat::ConversationStage;
use crate::ports::SessionObserver;

#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    resets: Arc<Mutex<usize>>,
    datasets: Arc<Mutex<Vec<Vec<String>>>>,
    stages: Arc<Mutex<Vec<ConversationStage>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_count(&self) -> usize {
        *self.resets.lock().unwrap()
    }

    /// Column lists of every loaded dataset, in order.
    pub fn loaded_datasets(&self) -> Vec<Vec<String>> {
        self.datasets.lock().unwrap().clone()
    }

    /// Every stage entered, in order.
    pub fn visited_stages(&self) -> Vec<ConversationStage> {
        self.stages.lock().unwrap().clone()
    }
}

impl SessionObserver for RecordingObserver {
    fn dataset_loaded(&self, columns: &[String]) {
        self.datasets.lock().unwrap().push(columns.to_vec());
    }

    fn session_reset(&self) {
        *self.resets.lock().unwrap() += 1;
    }

    fn stage_changed(&self, _from: ConversationStage, to: ConversationStage) {
        self.stages.lock().unwrap().push(to);
    }
}
