//! Filter types for search, chat, and document generation.
//!
//! A filter restricts which memos participate in an operation. Multiple
//! filters combine conjunctively (logical AND) server-side; the client's
//! obligation is a faithful wire representation.

use serde::{Deserialize, Serialize};

/// Comparison operator for a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Equals
    Eq,
    /// Not equals
    Neq,
    /// Substring match
    Contains,
    /// Prefix match
    StartsWith,
    /// Suffix match
    EndsWith,
    /// Member of a value set
    In,
    /// Not a member of a value set
    #[serde(rename = "not_in")]
    NotIn,
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eq => write!(f, "eq"),
            Self::Neq => write!(f, "neq"),
            Self::Contains => write!(f, "contains"),
            Self::StartsWith => write!(f, "startswith"),
            Self::EndsWith => write!(f, "endswith"),
            Self::In => write!(f, "in"),
            Self::NotIn => write!(f, "not_in"),
        }
    }
}

/// Which field namespace a filter targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Built-in memo attribute (title, source, tags, reference id)
    #[default]
    NativeField,
    /// Caller-defined key inside the memo metadata map
    CustomMetadata,
}

/// Filter value: a single string or a set of strings (for `in`/`not_in`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Single(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Single(v)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::Many(v)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(v: Vec<&str>) -> Self {
        FilterValue::Many(v.into_iter().map(String::from).collect())
    }
}

/// A single filter predicate.
///
/// The client does not validate field names; unknown field/operator
/// combinations are rejected by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
    pub filter_type: FilterType,
}

impl Filter {
    /// Filter on a built-in memo attribute.
    pub fn native(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            filter_type: FilterType::NativeField,
        }
    }

    /// Filter on a caller-defined metadata key.
    pub fn metadata(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            filter_type: FilterType::CustomMetadata,
        }
    }
}
