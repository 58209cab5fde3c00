use serde::{Deserialize, Serialize};

use super::search::SearchResponse;

/// One output handed back to the host runtime
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "message", rename_all = "lowercase")]
pub enum ToolInvokeMessage {
    Json(SearchResponse),
    Text(String),
}

impl ToolInvokeMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&SearchResponse> {
        match self {
            Self::Json(response) => Some(response),
            Self::Text(_) => None,
        }
    }
}
