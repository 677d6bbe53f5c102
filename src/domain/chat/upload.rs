//! Upload methods the chat offers.

use serde::{Deserialize, Serialize};

/// A way of getting a dataset into the session.
///
/// The options message lists `UploadMethod::ALL`; adding a method means adding
/// a variant here and nothing else in the dialogue logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadMethod {
    Csv,
}

impl UploadMethod {
    /// Every method currently offered.
    pub const ALL: [UploadMethod; 1] = [UploadMethod::Csv];

    /// Button label, also the text recorded as the user's choice.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "Upload CSV",
        }
    }

    /// Name of the file format, used in prompts.
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
        }
    }

    /// Resolves a button label back to a method.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}
