//! Wire DTOs for the backend auth endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON (camelCase) so the login response can
//! be persisted verbatim as the `currentUser` record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// One of `ADMIN`, `RESTAURANT`, `CUSTOMER`, `DELIVERY`.
    pub role: String,
}

/// Successful login response, persisted as the session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: i64,
    pub role: String,
    /// Set for `RESTAURANT` accounts.
    #[serde(default)]
    pub restaurant_id: Option<i64>,
    /// Set for `DELIVERY` accounts.
    #[serde(default)]
    pub delivery_staff_id: Option<i64>,
    pub token: String,
}

/// Error body returned by the backend on 4xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
