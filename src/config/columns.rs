use serde::{Deserialize, Serialize};

/// Header labels of the movement CSV columns.
///
/// Lookup is by label, so column order in the file does not matter. The same
/// labels are written back on export, which keeps exported files importable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLabels {
    pub id: String,
    pub timestamp: String,
    pub workplace: String,
    pub room: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            timestamp: "timestamp".to_string(),
            workplace: "is_workplace".to_string(),
            room: "room".to_string(),
        }
    }
}

impl ColumnLabels {
    /// Header of `<prefix>_all.csv`.
    pub fn all_header(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.timestamp.as_str(),
            self.workplace.as_str(),
            self.room.as_str(),
        ]
    }

    /// Header of `<prefix>_work.csv`.
    pub fn work_header(&self) -> [&str; 3] {
        [self.id.as_str(), self.timestamp.as_str(), self.room.as_str()]
    }
}
