//! Domain Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::tool::ToolKind;

/// One recorded main generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in epoch milliseconds, as a decimal string
    pub id: String,
    pub tool: ToolKind,
    pub input: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(tool: ToolKind, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self::created_at(tool, input, output, Utc::now())
    }

    pub fn created_at(
        tool: ToolKind,
        input: impl Into<String>,
        output: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: timestamp.timestamp_millis().to_string(),
            tool,
            input: input.into(),
            output: output.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_epoch_millis() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let entry = HistoryEntry::created_at(ToolKind::YoutubeSeo, "in", "out", at);
        assert_eq!(entry.id, "1700000000123");
    }

    #[test]
    fn test_reads_browser_history_shape() {
        let json = r#"{"id":"1700000000123","tool":"YouTube SEO","input":"cats","output":"titles","timestamp":"2023-11-14T22:13:20.123Z"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.tool, ToolKind::YoutubeSeo);
        assert_eq!(entry.timestamp.timestamp_millis(), 1_700_000_000_123);
    }
}
