//! Skald API client implementation.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::{debug, info};

use skald_core::{
    ChatRequest, ChatResponse, Error, GenerateDocRequest, GenerateDocResponse, IdType,
    ListMemosQuery, ListMemosResponse, Memo, NewMemo, Result, SearchRequest, SearchResponse,
    UpdateMemo,
};

use crate::config::SkaldConfig;
use crate::streaming::{decode_event_stream, EventStream};

/// Asynchronous client for the Skald knowledge-base API.
///
/// Holds a connection pool shared by all calls; cloning is cheap and safe for
/// concurrent use. Dropping the last clone releases the pool. There is no
/// cross-call ordering guarantee — callers needing ordering must serialize
/// themselves.
#[derive(Debug, Clone)]
pub struct Skald {
    client: Client,
    config: SkaldConfig,
}

/// Request body wrapper that adds the `stream` flag next to the caller's
/// fields, as the chat/generate endpoints expect.
#[derive(Serialize)]
struct StreamFlagged<'a, T: Serialize> {
    #[serde(flatten)]
    body: &'a T,
    stream: bool,
}

impl Skald {
    /// Create a client from the given configuration.
    pub fn new(config: SkaldConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        info!("Initializing Skald client: url={}", config.base_url);

        Ok(Self { client, config })
    }

    /// Create a client for the production endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(SkaldConfig::new(api_key))
    }

    /// Create a client from environment variables (see
    /// [`SkaldConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(SkaldConfig::from_env()?)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SkaldConfig {
        &self.config
    }

    /// Build a request with bearer authentication.
    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    /// Path (plus optional `id_type` query) for a memo addressed in the given
    /// identifier space. The id is percent-encoded; the query param is only
    /// present for the non-default space.
    fn memo_endpoint(memo_id: &str, id_type: IdType) -> String {
        let mut endpoint = format!("/api/v1/memo/{}", urlencoding::encode(memo_id));
        if id_type != IdType::MemoUuid {
            endpoint.push_str(&format!("?id_type={id_type}"));
        }
        endpoint
    }

    /// Send a non-streaming request and map the response status.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Send a streaming request. No overall deadline: a healthy stream may
    /// outlive any fixed timeout, and stalls surface as transport faults on
    /// the body stream instead.
    async fn execute_streaming(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());

        Err(match status {
            StatusCode::NOT_FOUND => Error::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Error::Validation(message)
            }
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        })
    }

    // =========================================================================
    // CRUD OPERATIONS
    // =========================================================================

    /// Create a new memo.
    ///
    /// The server summarizes, chunks, and indexes the memo for search, and
    /// returns the authoritative created state.
    pub async fn create_memo(&self, memo: NewMemo) -> Result<Memo> {
        debug!(
            title_len = memo.title.len(),
            content_len = memo.content.len(),
            "Creating memo"
        );

        let mut memo = memo;
        // The API expects a metadata object, never null.
        if memo.metadata.is_none() {
            memo.metadata = Some(JsonValue::Object(serde_json::Map::new()));
        }

        let response = self
            .execute(self.request(Method::POST, "/api/v1/memo").json(&memo))
            .await?;
        Ok(response.json().await?)
    }

    /// Retrieve a memo by UUID or caller-assigned reference id.
    pub async fn get_memo(&self, memo_id: &str, id_type: IdType) -> Result<Memo> {
        debug!(memo_id, %id_type, "Fetching memo");

        let endpoint = Self::memo_endpoint(memo_id, id_type);
        let response = self.execute(self.request(Method::GET, &endpoint)).await?;
        Ok(response.json().await?)
    }

    /// List memos with pagination. Non-positive page values are rejected
    /// before any request is issued.
    pub async fn list_memos(&self, query: ListMemosQuery) -> Result<ListMemosResponse> {
        if query.page == Some(0) {
            return Err(Error::Validation("page must be a positive integer".to_string()));
        }
        if query.page_size == Some(0) {
            return Err(Error::Validation(
                "page_size must be a positive integer".to_string(),
            ));
        }

        let page = query.page.unwrap_or(skald_core::defaults::PAGE);
        let page_size = query.page_size.unwrap_or(skald_core::defaults::PAGE_SIZE);
        debug!(page, page_size, "Listing memos");

        let endpoint = format!("/api/v1/memo?page={page}&page_size={page_size}");
        let response = self.execute(self.request(Method::GET, &endpoint)).await?;
        Ok(response.json().await?)
    }

    /// Update an existing memo. Only the fields set on `update` change; the
    /// server re-summarizes and re-indexes when content changes, and returns
    /// the authoritative updated state.
    pub async fn update_memo(
        &self,
        memo_id: &str,
        id_type: IdType,
        update: UpdateMemo,
    ) -> Result<Memo> {
        debug!(memo_id, %id_type, "Updating memo");

        let endpoint = Self::memo_endpoint(memo_id, id_type);
        let response = self
            .execute(self.request(Method::PATCH, &endpoint).json(&update))
            .await?;
        Ok(response.json().await?)
    }

    /// Delete a memo.
    pub async fn delete_memo(&self, memo_id: &str, id_type: IdType) -> Result<()> {
        debug!(memo_id, %id_type, "Deleting memo");

        let endpoint = Self::memo_endpoint(memo_id, id_type);
        self.execute(self.request(Method::DELETE, &endpoint))
            .await?;
        Ok(())
    }

    // =========================================================================
    // SEARCH AND QUERY OPERATIONS
    // =========================================================================

    /// Search the knowledge base.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        debug!(
            query_len = request.query.len(),
            method = %request.search_method,
            "Searching"
        );

        let response = self
            .execute(self.request(Method::POST, "/api/v1/search").json(&request))
            .await?;
        let result: SearchResponse = response.json().await?;

        debug!(result_count = result.results.len(), "Search complete");
        Ok(result)
    }

    /// Chat with the knowledge base. Returns the complete response with
    /// `[[N]]` citation markers.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        debug!(query_len = request.query.len(), "Chat request");

        let body = StreamFlagged {
            body: &request,
            stream: false,
        };
        let response = self
            .execute(self.request(Method::POST, "/api/v1/chat").json(&body))
            .await?;
        let result: ChatResponse = response.json().await?;

        debug!(response_len = result.response.len(), "Chat complete");
        Ok(result)
    }

    /// Chat with the knowledge base, streaming the response as it is
    /// generated. See [`EventStream`] for the sequence contract.
    pub async fn streamed_chat(&self, request: ChatRequest) -> Result<EventStream> {
        debug!(query_len = request.query.len(), "Streamed chat request");

        let body = StreamFlagged {
            body: &request,
            stream: true,
        };
        let response = self
            .execute_streaming(self.request(Method::POST, "/api/v1/chat").json(&body))
            .await?;
        Ok(decode_event_stream(response.bytes_stream()))
    }

    /// Generate a document grounded in the knowledge base.
    pub async fn generate_doc(&self, request: GenerateDocRequest) -> Result<GenerateDocResponse> {
        debug!(prompt_len = request.prompt.len(), "Generate request");

        let body = StreamFlagged {
            body: &request,
            stream: false,
        };
        let response = self
            .execute(self.request(Method::POST, "/api/v1/generate").json(&body))
            .await?;
        let result: GenerateDocResponse = response.json().await?;

        debug!(response_len = result.response.len(), "Generation complete");
        Ok(result)
    }

    /// Generate a document, streaming it as it is generated. See
    /// [`EventStream`] for the sequence contract.
    pub async fn streamed_generate_doc(
        &self,
        request: GenerateDocRequest,
    ) -> Result<EventStream> {
        debug!(prompt_len = request.prompt.len(), "Streamed generate request");

        let body = StreamFlagged {
            body: &request,
            stream: true,
        };
        let response = self
            .execute_streaming(self.request(Method::POST, "/api/v1/generate").json(&body))
            .await?;
        Ok(decode_event_stream(response.bytes_stream()))
    }
}
