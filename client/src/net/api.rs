//! Typed client for the platform's v1 HTTP API.
//!
//! Browser builds dispatch real requests via `gloo-net`; native builds
//! compile every method to a stub returning [`ApiError::Unavailable`] so
//! state code and tests link without a network stack.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result` with a typed [`ApiError`]: transport
//! failures, the gateway's `{code, message}` error body on non-success
//! statuses, and schema mismatches. No retries and no timeout policy here;
//! callers own failure handling.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use once_cell::sync::Lazy;
use schema::{AuthToken, LoginPasswordRequest, Product, RegisterUserRequest, User};

#[cfg(any(test, feature = "browser"))]
use schema::ErrorBody;
#[cfg(feature = "browser")]
use schema::{LoginPasswordResponse, RegisterUserResponse, ViewProductResponse, ViewUserResponse};

use crate::config;

/// Error returned by [`ApiClient`] requests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The gateway answered with a non-success status.
    #[error("api error {status}: {message}")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// Platform error code from the response body (gRPC numbering).
        code: i32,
        /// Top-level error message from the response body.
        message: String,
    },
    /// The response body did not match the declared schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Requests are only possible in a browser build.
    #[error("api is unavailable outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "browser"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/v1/auth/login")
}

#[cfg(any(test, feature = "browser"))]
fn users_endpoint(base: &str) -> String {
    format!("{base}/v1/users")
}

#[cfg(any(test, feature = "browser"))]
fn user_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/v1/users/{user_id}")
}

#[cfg(any(test, feature = "browser"))]
fn product_endpoint(base: &str, product_id: &str) -> String {
    format!("{base}/v1/products/{product_id}")
}

/// Map a non-success response to [`ApiError::Api`], degrading to a
/// message-only error when the gateway body did not decode.
#[cfg(any(test, feature = "browser"))]
fn api_error(status: u16, body: Option<ErrorBody>) -> ApiError {
    match body {
        Some(body) => ApiError::Api {
            status,
            code: body.code,
            message: body.message,
        },
        None => ApiError::Api {
            status,
            code: 2, // gRPC "unknown"
            message: format!("status {status}"),
        },
    }
}

#[cfg(feature = "browser")]
async fn decode_success<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let err = api_error(resp.status(), resp.json().await.ok());
        log::warn!("{err}");
        return Err(err);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Shared, stateless handle for the platform's v1 HTTP API.
///
/// Holds only the normalized base URL; construct once and share freely.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Wrap `base_url`, trimming any trailing `/` so path joins stay clean.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The URL every request path is joined onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign in via `POST /v1/auth/login`, returning the issued token.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, a non-success status, a response
    /// carrying no token, or outside a browser build.
    pub async fn login(&self, req: &LoginPasswordRequest) -> Result<AuthToken, ApiError> {
        #[cfg(feature = "browser")]
        {
            let url = login_endpoint(&self.base_url);
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .json(req)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body: LoginPasswordResponse = decode_success(resp).await?;
            body.data
                .ok_or_else(|| ApiError::Decode("login response carried no token".to_owned()))
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = req;
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account via `POST /v1/users`, returning the new user.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, a non-success status, a response
    /// carrying no user, or outside a browser build.
    pub async fn register_user(&self, req: &RegisterUserRequest) -> Result<User, ApiError> {
        #[cfg(feature = "browser")]
        {
            let url = users_endpoint(&self.base_url);
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .json(req)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body: RegisterUserResponse = decode_success(resp).await?;
            body.user
                .ok_or_else(|| ApiError::Decode("registration response carried no user".to_owned()))
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = req;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch an account via `GET /v1/users/{id}` with bearer credentials.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, a non-success status, a response
    /// carrying no user, or outside a browser build.
    pub async fn view_user(&self, token: &AuthToken, user_id: &str) -> Result<User, ApiError> {
        #[cfg(feature = "browser")]
        {
            let url = user_endpoint(&self.base_url, user_id);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &token.authorization_header())
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body: ViewUserResponse = decode_success(resp).await?;
            body.user
                .ok_or_else(|| ApiError::Decode("user response carried no user".to_owned()))
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (token, user_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch a catalogue item via `GET /v1/products/{id}`.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, a non-success status, a response
    /// carrying no product, or outside a browser build.
    pub async fn view_product(&self, product_id: &str) -> Result<Product, ApiError> {
        #[cfg(feature = "browser")]
        {
            let url = product_endpoint(&self.base_url, product_id);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body: ViewProductResponse = decode_success(resp).await?;
            body.product
                .ok_or_else(|| ApiError::Decode("product response carried no product".to_owned()))
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = product_id;
            Err(ApiError::Unavailable)
        }
    }
}

/// Process-wide client bound to the configured gateway; alive from first
/// use until process exit.
pub static API: Lazy<ApiClient> = Lazy::new(|| ApiClient::new(config::api_url()));
