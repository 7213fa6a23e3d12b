//! One renderer per route.
//!
//! Each view takes the API client and whatever the user entered, performs its
//! calls, and returns a `Page`. Every `ApiError` is turned into a block here;
//! no failure escapes a render.

mod create;
mod delete;
mod find;
mod home;
mod list;

use customer_core::ApiError;
use thiserror::Error;

pub use create::{create, create_form};
pub use delete::{delete, delete_warning};
pub use find::find;
pub use home::home;
pub use list::list;

use crate::render::Block;

/// Value shown in an empty numeric input.
pub const DEFAULT_CUSTOMER_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdInputError {
    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),
    #[error("the ID must be at least 1")]
    BelowMinimum,
}

/// Parse the customer ID field: whole numbers from 1, blank means the default.
pub fn parse_customer_id(input: &str) -> Result<u64, IdInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_CUSTOMER_ID);
    }
    match input.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id as u64),
        Ok(_) => Err(IdInputError::BelowMinimum),
        Err(_) => input
            .parse::<u64>()
            .map_err(|_| IdInputError::NotAnInteger(input.to_string())),
    }
}

/// The generic panel for an error no view handles specifically.
pub(crate) fn error_block(err: &ApiError) -> Block {
    match err.response() {
        Some((status, body)) => Block::Error(format!("Error {status}: {body}")),
        None => connection_block(err),
    }
}

fn connection_block(err: &ApiError) -> Block {
    Block::Error(format!("Connection error: {}", connection_detail(err)))
}

/// The underlying failure text: the transport's own message when there is one.
pub(crate) fn connection_detail(err: &ApiError) -> String {
    match err {
        ApiError::Connection(msg) => msg.clone(),
        other => other.to_string(),
    }
}
