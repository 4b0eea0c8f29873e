//! Memo data models for the Skald SDK.
//!
//! These types mirror the wire shapes of the memo endpoints. The client never
//! mutates a memo locally; every mutation round-trips through the server,
//! which returns the authoritative new state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

// =============================================================================
// IDENTIFIER SPACES
// =============================================================================

/// Identifier space for memo lookup, update, and delete.
///
/// Exactly one space is valid per call: the server-assigned UUID or the
/// caller-assigned reference id (unique per caller, enforced server-side).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    /// Server-assigned memo UUID
    #[default]
    MemoUuid,
    /// Caller-assigned reference id
    ReferenceId,
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemoUuid => write!(f, "memo_uuid"),
            Self::ReferenceId => write!(f, "reference_id"),
        }
    }
}

// =============================================================================
// MEMO TYPES
// =============================================================================

/// Complete memo details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memo {
    pub uuid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    /// Server-derived summary. Empty while processing is pending.
    pub summary: String,
    pub content_length: i64,
    pub metadata: JsonValue,
    pub client_reference_id: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "type")]
    pub memo_type: String,
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub archived: bool,
    pub pending: bool,
}

/// Lightweight memo information for list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoListItem {
    pub uuid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub summary: String,
    pub content_length: i64,
    pub metadata: JsonValue,
    pub client_reference_id: Option<String>,
}

/// Data for creating a new memo.
///
/// Title and content are required; everything else is optional. Absent
/// metadata is sent as an empty object so the server never sees a null map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMemo {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl NewMemo {
    /// Create a memo payload with the required fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            metadata: None,
            reference_id: None,
            tags: None,
            source: None,
            expiration_date: None,
        }
    }

    /// Set free-form metadata.
    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the caller-assigned reference id.
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    /// Set tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set the source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the expiration date.
    pub fn with_expiration_date(mut self, expiration_date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }
}

/// Partial update for an existing memo. Only set fields are serialized, so
/// the server touches nothing else.
///
/// Note the wire asymmetry with [`NewMemo`]: creation takes `reference_id`,
/// update takes `client_reference_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMemo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl UpdateMemo {
    /// Create an empty update (no fields changed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set new content. The server re-summarizes and re-indexes the memo.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replace the metadata map.
    pub fn metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the caller-assigned reference id.
    pub fn client_reference_id(mut self, id: impl Into<String>) -> Self {
        self.client_reference_id = Some(id.into());
        self
    }

    /// Set the source label.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the expiration date.
    pub fn expiration_date(mut self, expiration_date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    /// Whether any field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.metadata.is_none()
            && self.client_reference_id.is_none()
            && self.source.is_none()
            && self.expiration_date.is_none()
    }
}

// =============================================================================
// LISTING / PAGINATION
// =============================================================================

/// Pagination parameters for memo listing. Both values are 1-based positive
/// integers; the client rejects non-positive values before issuing a request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListMemosQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListMemosQuery {
    /// List with server defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number (1-based).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Paginated memo listing.
///
/// `next`/`previous` are opaque cursors passed through verbatim; `results`
/// never exceeds the requested page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMemosResponse {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<MemoListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&IdType::MemoUuid).unwrap(),
            "\"memo_uuid\""
        );
        assert_eq!(
            serde_json::to_string(&IdType::ReferenceId).unwrap(),
            "\"reference_id\""
        );
    }

    #[test]
    fn test_id_type_display_matches_wire() {
        assert_eq!(IdType::MemoUuid.to_string(), "memo_uuid");
        assert_eq!(IdType::ReferenceId.to_string(), "reference_id");
    }

    #[test]
    fn test_id_type_default() {
        assert_eq!(IdType::default(), IdType::MemoUuid);
    }

    #[test]
    fn test_new_memo_minimal_serialization() {
        let memo = NewMemo::new("Meeting Notes", "Discussion about Q1 goals");
        let json = serde_json::to_value(&memo).unwrap();

        assert_eq!(json["title"], "Meeting Notes");
        assert_eq!(json["content"], "Discussion about Q1 goals");
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("metadata"));
        assert!(!obj.contains_key("reference_id"));
        assert!(!obj.contains_key("tags"));
        assert!(!obj.contains_key("source"));
        assert!(!obj.contains_key("expiration_date"));
    }

    #[test]
    fn test_new_memo_builder() {
        let memo = NewMemo::new("Title", "Content")
            .with_metadata(json!({"priority": "high"}))
            .with_reference_id("my-ref-123")
            .with_tags(vec!["meeting".to_string(), "q1".to_string()])
            .with_source("notion");

        let json = serde_json::to_value(&memo).unwrap();
        assert_eq!(json["metadata"]["priority"], "high");
        assert_eq!(json["reference_id"], "my-ref-123");
        assert_eq!(json["tags"], json!(["meeting", "q1"]));
        assert_eq!(json["source"], "notion");
    }

    #[test]
    fn test_update_memo_only_set_fields_serialized() {
        let update = UpdateMemo::new().title("Updated Title");
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 1);
        assert_eq!(json["title"], "Updated Title");
    }

    #[test]
    fn test_update_memo_uses_client_reference_id() {
        let update = UpdateMemo::new().client_reference_id("ref-9");
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["client_reference_id"], "ref-9");
        assert!(!json.as_object().unwrap().contains_key("reference_id"));
    }

    #[test]
    fn test_update_memo_is_empty() {
        assert!(UpdateMemo::new().is_empty());
        assert!(!UpdateMemo::new().content("x").is_empty());
    }

    #[test]
    fn test_memo_deserialization() {
        let json = json!({
            "uuid": "550e8400-e29b-41d4-a716-446655440000",
            "created_at": "2026-01-05T10:00:00Z",
            "updated_at": "2026-01-06T12:30:00Z",
            "title": "Meeting Notes",
            "content": "Discussion about Q1 goals",
            "summary": "Q1 planning discussion",
            "content_length": 25,
            "metadata": {"priority": "high"},
            "client_reference_id": null,
            "source": "notion",
            "type": "text",
            "expiration_date": null,
            "tags": ["meeting", "q1"],
            "archived": false,
            "pending": false
        });

        let memo: Memo = serde_json::from_value(json).unwrap();
        assert!(!memo.uuid.is_nil());
        assert_eq!(memo.title, "Meeting Notes");
        assert_eq!(memo.memo_type, "text");
        assert_eq!(memo.tags, vec!["meeting", "q1"]);
        assert_eq!(memo.metadata["priority"], "high");
        assert!(memo.client_reference_id.is_none());
        assert!(!memo.pending);
    }

    #[test]
    fn test_memo_tags_default_when_absent() {
        let json = json!({
            "uuid": "550e8400-e29b-41d4-a716-446655440000",
            "created_at": "2026-01-05T10:00:00Z",
            "updated_at": "2026-01-05T10:00:00Z",
            "title": "t",
            "content": "c",
            "summary": "",
            "content_length": 1,
            "metadata": {},
            "client_reference_id": null,
            "source": null,
            "type": "text",
            "expiration_date": null,
            "archived": false,
            "pending": true
        });

        let memo: Memo = serde_json::from_value(json).unwrap();
        assert!(memo.tags.is_empty());
        assert!(memo.pending);
    }

    #[test]
    fn test_list_memos_response_deserialization() {
        let json = json!({
            "count": 42,
            "next": "/api/v1/memo?page=3&page_size=20",
            "previous": "/api/v1/memo?page=1&page_size=20",
            "results": [{
                "uuid": "550e8400-e29b-41d4-a716-446655440000",
                "created_at": "2026-01-05T10:00:00Z",
                "updated_at": "2026-01-05T10:00:00Z",
                "title": "t",
                "summary": "s",
                "content_length": 100,
                "metadata": {},
                "client_reference_id": "ref-1"
            }]
        });

        let resp: ListMemosResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.count, 42);
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].client_reference_id.as_deref(), Some("ref-1"));
        assert!(resp.next.is_some());
    }

    #[test]
    fn test_list_memos_query_builder() {
        let query = ListMemosQuery::new().page(2).page_size(50);
        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(50));

        let default = ListMemosQuery::new();
        assert!(default.page.is_none());
        assert!(default.page_size.is_none());
    }
}
