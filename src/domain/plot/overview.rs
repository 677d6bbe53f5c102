//! Dataset overview returned after an upload.

use serde::{Deserialize, Serialize};

/// Shape and quality counters of the uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub num_rows: u64,
    pub num_columns: u64,
    pub missing_values: u64,
    pub duplicate_rows: u64,
}

impl DatasetOverview {
    /// Returns true if every cell is present and no row repeats.
    pub fn is_clean(&self) -> bool {
        self.missing_values == 0 && self.duplicate_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let overview: DatasetOverview = serde_json::from_str(
            r#"{"num_rows": 10, "num_columns": 3, "missing_values": 2, "duplicate_rows": 0}"#,
        )
        .unwrap();
        assert_eq!(overview.num_rows, 10);
        assert!(!overview.is_clean());
    }
}
