//! Search request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::Filter;

/// Search method for queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Semantic similarity search over embedded content chunks
    #[default]
    ChunkVectorSearch,
    /// Literal title substring match
    TitleContains,
    /// Literal title prefix match
    #[serde(rename = "title_startswith")]
    TitleStartsWith,
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChunkVectorSearch => write!(f, "chunk_vector_search"),
            Self::TitleContains => write!(f, "title_contains"),
            Self::TitleStartsWith => write!(f, "title_startswith"),
        }
    }
}

/// Request parameters for search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_method: SearchMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl SearchRequest {
    /// Create a search request with the given query and method.
    pub fn new(query: impl Into<String>, search_method: SearchMethod) -> Self {
        Self {
            query: query.into(),
            search_method,
            limit: None,
            filters: None,
        }
    }

    /// Set the result-count limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add a filter (combined conjunctively with any others).
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

/// A single search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub uuid: Uuid,
    pub title: String,
    pub summary: String,
    pub content_snippet: String,
    /// Relevance distance; lower is closer. Absent for literal title matches.
    pub distance: Option<f64>,
}

/// Response from the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterOperator;
    use serde_json::json;

    #[test]
    fn test_search_method_wire_values() {
        assert_eq!(
            serde_json::to_value(SearchMethod::ChunkVectorSearch).unwrap(),
            json!("chunk_vector_search")
        );
        assert_eq!(
            serde_json::to_value(SearchMethod::TitleContains).unwrap(),
            json!("title_contains")
        );
        assert_eq!(
            serde_json::to_value(SearchMethod::TitleStartsWith).unwrap(),
            json!("title_startswith")
        );
    }

    #[test]
    fn test_search_method_display_matches_wire() {
        assert_eq!(
            SearchMethod::ChunkVectorSearch.to_string(),
            "chunk_vector_search"
        );
        assert_eq!(SearchMethod::TitleStartsWith.to_string(), "title_startswith");
    }

    #[test]
    fn test_search_request_minimal() {
        let request = SearchRequest::new("quarterly goals", SearchMethod::ChunkVectorSearch);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["query"], "quarterly goals");
        assert_eq!(json["search_method"], "chunk_vector_search");
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("limit"));
        assert!(!obj.contains_key("filters"));
    }

    #[test]
    fn test_search_request_with_limit_and_filters() {
        let request = SearchRequest::new("roadmap", SearchMethod::TitleContains)
            .with_limit(10)
            .with_filter(Filter::native("source", FilterOperator::Eq, "notion"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["limit"], 10);
        assert_eq!(json["filters"][0]["field"], "source");
    }

    #[test]
    fn test_with_filter_appends() {
        let request = SearchRequest::new("x", SearchMethod::ChunkVectorSearch)
            .with_filter(Filter::native("tags", FilterOperator::In, vec!["a"]))
            .with_filter(Filter::native("source", FilterOperator::Eq, "b"));

        assert_eq!(request.filters.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = json!({
            "results": [{
                "uuid": "550e8400-e29b-41d4-a716-446655440000",
                "title": "Meeting Notes",
                "summary": "Q1 planning",
                "content_snippet": "Discussion about quarterly goals...",
                "distance": 0.42
            }, {
                "uuid": "650e8400-e29b-41d4-a716-446655440000",
                "title": "Roadmap",
                "summary": "",
                "content_snippet": "Roadmap for the year",
                "distance": null
            }]
        });

        let resp: SearchResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].distance, Some(0.42));
        assert!(resp.results[1].distance.is_none());
    }
}
