//! Synchronous API client core for the customer service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `CustomerClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Status codes are classified once by `StatusClass` and surface as
//!   `ApiError` variants rather than panics or sentinel values.
//! - `CustomerForm` holds the client-side checks run before a create.

pub mod client;
pub mod error;
pub mod http;
pub mod status;
pub mod types;
pub mod validation;

pub use client::CustomerClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use status::StatusClass;
pub use types::{CreateCustomer, Customer, HealthStatus};
pub use validation::{CustomerForm, ValidationError};
