//! Wire DTOs for the storefront platform's public v1 HTTP contract.
//!
//! This crate owns the request/response shapes the web client exchanges with
//! the API gateway. Field names match the gateway's snake_case JSON exactly,
//! so every type derives straight `serde` with no rename attributes. Message
//! fields that the gateway may omit are `Option`; the client decides whether
//! an absent field is an error.

use serde::{Deserialize, Serialize};

/// Bearer credentials issued by the auth service on a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Token scheme; the platform always issues `"Bearer"`.
    pub token_type: String,
    /// Signed JWT granting access to authenticated endpoints.
    pub access_token: String,
    /// Token lifetime in seconds from the moment of issue.
    pub expires_in: i64,
}

impl AuthToken {
    /// Render the value for an `Authorization` request header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// A registered storefront customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID string assigned by the user service).
    pub id: String,
    /// Given name provided at registration.
    pub first_name: String,
    /// Family name provided at registration.
    pub last_name: String,
    /// Contact address; unique across the platform.
    pub email: String,
    /// Seconds since the Unix epoch when the account was created.
    pub created_at: Option<i64>,
    /// Seconds since the Unix epoch when the account was last modified.
    pub updated_at: Option<i64>,
}

impl User {
    /// Full name for display, with either part tolerated empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// A catalogue item offered by the storefront.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID string assigned by the product service).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Unit price; the gateway serializes the service's float as-is.
    pub price: f32,
    /// Seconds since the Unix epoch when the product was listed.
    pub created_at: Option<i64>,
    /// Seconds since the Unix epoch when the product was last modified.
    pub updated_at: Option<i64>,
}

/// Body for `POST /v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPasswordRequest {
    /// Account being signed in.
    pub user_id: String,
    /// Plaintext password, verified server-side.
    pub password: String,
}

/// Response for `POST /v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPasswordResponse {
    /// Human-readable outcome, e.g. `"Success"`.
    pub detail: String,
    /// Issued credentials; absent when the gateway strips the payload.
    pub data: Option<AuthToken>,
}

/// Body for `POST /v1/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Contact address; must be unused on the platform.
    pub email: String,
    /// Plaintext password, hashed by the auth service.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Response for `POST /v1/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    /// The newly created account.
    pub user: Option<User>,
}

/// Response for `GET /v1/users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewUserResponse {
    /// The requested account.
    pub user: Option<User>,
}

/// Response for `GET /v1/products/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewProductResponse {
    /// The requested catalogue item.
    pub product: Option<Product>,
}

/// Error body the gateway returns for any non-success status,
/// e.g. `{"code":5,"message":"user not found","details":[]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Platform error code (gRPC status numbering).
    pub code: i32,
    /// Top-level error message; wrapped causes are never exposed.
    pub message: String,
}
