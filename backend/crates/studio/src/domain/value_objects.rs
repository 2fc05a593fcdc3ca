//! Value Objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rewrite applied to a previous output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefineAction {
    Shorten,
    Expand,
    Professional,
    Casual,
    #[serde(rename = "Fix Grammar")]
    FixGrammar,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown refine action: {0}")]
pub struct UnknownRefineAction(pub String);

impl RefineAction {
    pub const ALL: [RefineAction; 5] = [
        RefineAction::Shorten,
        RefineAction::Expand,
        RefineAction::Professional,
        RefineAction::Casual,
        RefineAction::FixGrammar,
    ];

    /// Label, also the wording inserted into the refine prompt
    pub fn label(&self) -> &'static str {
        match self {
            RefineAction::Shorten => "Shorten",
            RefineAction::Expand => "Expand",
            RefineAction::Professional => "Professional",
            RefineAction::Casual => "Casual",
            RefineAction::FixGrammar => "Fix Grammar",
        }
    }
}

impl fmt::Display for RefineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RefineAction {
    type Err = UnknownRefineAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefineAction::ALL
            .into_iter()
            .find(|action| action.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRefineAction(s.to_string()))
    }
}

/// Sampling parameters sent with every generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.85,
            top_k: 40,
            top_p: 0.95,
        }
    }
}

/// One backend call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_content: String,
    pub params: SamplingParams,
}

/// Whose history a request reads or writes.
///
/// Attached to each studio request by whoever authenticated it; every owner
/// sees only their own generations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryOwner(String);

impl HistoryOwner {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
