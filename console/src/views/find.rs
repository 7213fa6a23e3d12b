use customer_core::ApiError;

use crate::api::ApiClient;
use crate::render::{Block, Page};
use crate::transport::Transport;
use crate::views::error_block;

pub const NOT_FOUND: &str = "No customer found with this ID.";

pub fn find<T: Transport>(api: &ApiClient<T>, id: u64) -> Page {
    let mut page = Page::new("Find a customer by ID");

    match api.get_customer(id) {
        Ok(customer) => {
            page.push(Block::Success("Customer found".into()));
            for (label, value) in [
                ("ID", customer.id.to_string()),
                ("First name", customer.first_name),
                ("Last name", customer.last_name),
                ("Email", customer.email),
            ] {
                page.push(Block::Metric {
                    label: label.into(),
                    value,
                });
            }
        }
        Err(ApiError::NotFound { .. }) => {
            page.push(Block::Warning(NOT_FOUND.into()));
        }
        Err(err) => {
            page.push(error_block(&err));
        }
    }

    page
}
