//! Mock Upload Service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{DatasetFile, UploadError, UploadService, UploadedDataset};

/// Upload service answering from a queue.
#[derive(Debug, Clone, Default)]
pub struct MockUploadService {
    responses: Arc<Mutex<VecDeque<Result<UploadedDataset, UploadError>>>>,
    files: Arc<Mutex<Vec<DatasetFile>>>,
}

impl MockUploadService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful upload.
    pub fn with_dataset(self, dataset: UploadedDataset) -> Self {
        self.responses.lock().unwrap().push_back(Ok(dataset));
        self
    }

    /// Queues a failed upload.
    pub fn with_error(self, error: UploadError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Names of the files received so far.
    pub fn uploaded_names(&self) -> Vec<String> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }
}

#[async_trait]
impl UploadService for MockUploadService {
    async fn upload(&self, file: DatasetFile) -> Result<UploadedDataset, UploadError> {
        self.files.lock().unwrap().push(file);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(UploadError::rejected("No dataset configured")))
    }
}
