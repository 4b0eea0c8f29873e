//! # skald-core
//!
//! Core types for the Skald client SDK.
//!
//! This crate provides the request/response models, filter types, streaming
//! event protocol, and error taxonomy shared by the Skald API client.

pub mod defaults;
pub mod error;
pub mod filter;
pub mod generation;
pub mod models;
pub mod search;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{Filter, FilterOperator, FilterType, FilterValue};
pub use generation::{
    citation_indices, ChatRequest, ChatResponse, GenerateDocRequest, GenerateDocResponse,
    StreamEvent,
};
pub use models::{
    IdType, ListMemosQuery, ListMemosResponse, Memo, MemoListItem, NewMemo, UpdateMemo,
};
pub use search::{SearchMethod, SearchRequest, SearchResponse, SearchResult};
