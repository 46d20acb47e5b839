//! Directory API access.
//!
//! The plugin never performs network I/O itself. Stores hand out
//! [`FetchRequest`] descriptors, the plugin shim turns them into host web
//! requests using [`ApiClient::url_for`], and the host answers with a
//! `WebRequestResult` event that is decoded by [`decode_response`].
//!
//! # Modules
//!
//! - `request`: Request descriptors and context routing
//! - `response`: Status checking and JSON decoding

pub mod request;
pub mod response;

pub use request::FetchRequest;
pub use response::decode_response;

/// Base URL used when the plugin configuration does not set `api_base_url`.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Resolves request descriptors against a configured API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL. A trailing slash is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request.
    ///
    /// # Examples
    ///
    /// ```
    /// use userdeck::api::{ApiClient, FetchRequest};
    ///
    /// let client = ApiClient::new("https://api.example.com/");
    /// assert_eq!(
    ///     client.url_for(FetchRequest::Posts { user_id: 2 }),
    ///     "https://api.example.com/posts?userId=2"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, request: FetchRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
