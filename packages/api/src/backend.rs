//! # Application backend client
//!
//! [`CategoryBackend`] is the seam the submission workflow uses to create a
//! category; [`BackendClient`] implements it over HTTP.
//!
//! The request is `POST {backend_url}/api/Admin/category/add-category` with a
//! JSON [`NewCategory`] body and the session token as a bearer credential. The
//! backend answers with an [`ApiResponse`] envelope for both accepted and
//! rejected requests, so the body is decoded whatever the HTTP status; only a
//! body that is not an envelope becomes an [`ApiError::Server`].

use store::Session;

use crate::error::ApiError;
use crate::models::{ApiResponse, NewCategory};

/// Path of the category-creation endpoint.
pub const ADD_CATEGORY_PATH: &str = "/api/Admin/category/add-category";

/// Async trait for creating categories on the backend.
pub trait CategoryBackend {
    fn create_category(
        &self,
        category: &NewCategory,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>>;
}

/// HTTP client for the application backend.
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// A client authenticated with the session's token.
    pub fn for_session(base_url: &str, session: &Session) -> Self {
        Self::new(base_url, session.token().map(str::to_string))
    }
}

impl CategoryBackend for BackendClient {
    async fn create_category(&self, category: &NewCategory) -> Result<ApiResponse, ApiError> {
        add_new_category(&self.client, &self.base_url, self.token.as_deref(), category).await
    }
}

/// Create a category. Requires a session token.
pub async fn add_new_category(
    client: &reqwest::Client,
    base_url: &str,
    token: Option<&str>,
    category: &NewCategory,
) -> Result<ApiResponse, ApiError> {
    let token = token.ok_or(ApiError::MissingToken)?;
    let url = format!("{base_url}{ADD_CATEGORY_PATH}");

    let response = client
        .post(&url)
        .bearer_auth(token)
        .json(category)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|_| {
        tracing::error!("Unexpected response from {} ({}): {}", url, status, text);
        ApiError::Server(format!("{status}: {text}"))
    })
}
