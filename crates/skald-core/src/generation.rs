//! Chat and document-generation types, including the streaming event protocol.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::OnceLock;

use crate::filter::Filter;

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request parameters for chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl ChatRequest {
    /// Create a chat request for the given natural-language query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: None,
        }
    }

    /// Add a filter restricting which memos ground the answer.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(filter);
        self
    }

    /// Replace the filter list.
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Request parameters for document generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDocRequest {
    pub prompt: String,
    /// Free-text style/structure guidance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl GenerateDocRequest {
    /// Create a generation request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            rules: None,
            filters: None,
        }
    }

    /// Set style/structure rules.
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Add a filter restricting which memos ground the document.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(filter);
        self
    }

    /// Replace the filter list.
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// Response from the chat endpoint.
///
/// The response text embeds `[[N]]` citation markers, N being a 1-based
/// index into the cited source memos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub ok: bool,
    pub response: String,
    #[serde(default)]
    pub intermediate_steps: Vec<JsonValue>,
}

impl ChatResponse {
    /// Citation indices referenced by the response text, in order of
    /// appearance.
    pub fn citations(&self) -> Vec<usize> {
        citation_indices(&self.response)
    }
}

/// Response from the document-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDocResponse {
    pub ok: bool,
    pub response: String,
    #[serde(default)]
    pub intermediate_steps: Vec<JsonValue>,
}

impl GenerateDocResponse {
    /// Citation indices referenced by the generated document, in order of
    /// appearance.
    pub fn citations(&self) -> Vec<usize> {
        citation_indices(&self.response)
    }
}

/// Extract `[[N]]` citation markers from response text, in order of
/// appearance. Markers that do not parse as an integer are ignored.
pub fn citation_indices(text: &str) -> Vec<usize> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\[\[(\d+)\]\]").expect("valid citation regex"));

    re.captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}

// =============================================================================
// STREAMING EVENTS
// =============================================================================

/// A single event from a streaming chat or generation response.
///
/// A successful stream is zero or more `Token` events followed by exactly one
/// `Done`, after which the stream is exhausted. Transport faults are carried
/// as `Err` items by the stream itself, never as events, so a truncated
/// stream can never be mistaken for a complete answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    /// Incremental response fragment
    Token { content: String },
    /// Clean end of stream
    Done,
}

impl StreamEvent {
    /// The content fragment, if this is a token event.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Token { content } => Some(content),
            Self::Done => None,
        }
    }

    /// Whether this is the terminal done event.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
