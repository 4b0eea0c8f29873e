//! # skald-client
//!
//! Asynchronous HTTP client for the Skald knowledge-base API.
//!
//! This crate provides:
//! - Memo CRUD (create, get, list, update, delete)
//! - Search (semantic chunk-vector, title substring/prefix)
//! - Chat over the knowledge base, blocking or streaming
//! - Document generation, blocking or streaming
//!
//! Every operation is an independent request/response exchange; the client
//! holds no state beyond its configuration and connection pool, and is safe
//! to share across tasks. The SDK never retries on its own — failures are
//! surfaced as typed [`skald_core::Error`] values, with
//! [`Error::is_transient`](skald_core::Error::is_transient) marking the
//! retryable ones, so retry and backoff policy stays with the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use skald_client::Skald;
//! use skald_core::NewMemo;
//!
//! #[tokio::main]
//! async fn main() -> skald_core::Result<()> {
//!     let skald = Skald::with_api_key("your-api-key")?;
//!     let memo = skald
//!         .create_memo(NewMemo::new("Meeting Notes", "Discussion about Q1 goals..."))
//!         .await?;
//!     println!("created {}", memo.uuid);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod streaming;

// Re-export core types so most callers need a single dependency
pub use skald_core::{Error, Result};

pub use client::Skald;
pub use config::SkaldConfig;
pub use streaming::EventStream;
