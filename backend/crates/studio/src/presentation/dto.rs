//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::HistoryEntry;
use crate::domain::tool::{ToolCategory, ToolKind};

// ============================================================================
// Tool Catalog
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ToolCategory,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub chips: &'static [&'static str],
}

impl From<ToolKind> for ToolResponse {
    fn from(tool: ToolKind) -> Self {
        Self {
            id: tool.id(),
            name: tool.display_name(),
            category: tool.category(),
            description: tool.description(),
            placeholder: tool.placeholder(),
            chips: tool.chips(),
        }
    }
}

/// Response for GET /api/studio/tools
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsResponse {
    pub default_tool: &'static str,
    pub tools: Vec<ToolResponse>,
    pub refine_actions: Vec<&'static str>,
}

// ============================================================================
// Generate / Refine
// ============================================================================

/// Request for POST /api/studio/generate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Tool id or display name
    pub tool: String,
    pub input: String,
    /// Suggestion chips to insert into the input, in order
    #[serde(default)]
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub output: String,
    pub history_entry: HistoryEntryResponse,
}

/// Request for POST /api/studio/refine
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub tool: String,
    /// Output being refined
    pub output: String,
    /// One of the refine action labels
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineResponse {
    pub output: String,
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponse {
    pub id: String,
    pub tool: &'static str,
    pub tool_name: &'static str,
    pub input: String,
    pub output: String,
    pub timestamp_ms: i64,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            tool: entry.tool.id(),
            tool_name: entry.tool.display_name(),
            input: entry.input,
            output: entry.output,
            timestamp_ms: entry.timestamp.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntryResponse>,
}
