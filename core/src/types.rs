//! Domain DTOs for the customer API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently; the
//! integration tests catch drift between the two crates.

use serde::{Deserialize, Serialize};

/// A customer record as returned by the API. The server owns `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request payload for `POST /clients`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Payload of `GET /health`.
///
/// The shape is server-defined, so it is kept as an opaque JSON value and
/// passed through to the display untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HealthStatus(pub serde_json::Value);
