//! Terminal console for the customer API.
//!
//! # Overview
//! Five routes (home, list, create, find, delete), each rendering one page
//! from at most two API calls. `customer-core` builds and parses the HTTP
//! exchanges; this crate executes them, turns every outcome into a `Page`,
//! and drives navigation.
//!
//! # Design
//! - `ApiClient` is generic over `Transport`, so views run unchanged against
//!   ureq or a scripted transport in tests.
//! - Views never return errors. Each `ApiError` becomes a block on the page
//!   and the session keeps going.
//! - Configuration is resolved once in `main` and only read afterwards.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod router;
pub mod session;
pub mod transport;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::ApiClient;
pub use config::ConsoleConfig;
pub use error::{Error, Result};
pub use logging::{init_logging, Verbosity};
pub use render::{Block, Page};
pub use router::Route;
pub use session::Session;
pub use transport::{Transport, TransportError, UreqTransport};
