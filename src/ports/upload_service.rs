//! Upload Service Port - hands a dataset file to the analytics backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::chat::Row;

/// Port for dataset upload and first analysis.
///
/// The controller does not constrain file size or type; the service decides
/// what it accepts and explains rejections in `UploadError::Rejected`.
#[async_trait]
pub trait UploadService: Send + Sync {
    async fn upload(&self, file: DatasetFile) -> Result<UploadedDataset, UploadError>;
}

/// A file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl DatasetFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Reads a file from disk, naming it after the last path component.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| UploadError::Io(format!("{} is not a file", path.display())))?;
        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
        Ok(Self { name, contents })
    }
}

/// What the service learned from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedDataset {
    pub columns: Vec<String>,
    pub preview_rows: Vec<Row>,
}

impl UploadedDataset {
    pub fn new(columns: Vec<String>, preview_rows: Vec<Row>) -> Self {
        Self {
            columns,
            preview_rows,
        }
    }
}

/// Upload failures. Each carries text fit to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The service refused the file and said why.
    #[error("Upload rejected: {message}")]
    Rejected { message: String },

    #[error("File error: {0}")]
    Io(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid upload response: {0}")]
    InvalidResponse(String),
}

impl UploadError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Text shown in the chat after "Something went wrong uploading the file:".
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message } => message,
            Self::Io(message) | Self::Transport(message) | Self::InvalidResponse(message) => {
                message
            }
        }
    }
}
