use customer_core::{ApiError, CustomerForm, ValidationError};
use serde_json::json;

use crate::api::ApiClient;
use crate::render::{Block, Page};
use crate::transport::Transport;
use crate::views::error_block;

const TITLE: &str = "Add a new customer";

/// The form before anything is submitted.
pub fn create_form() -> Page {
    let mut page = Page::new(TITLE);
    page.push(Block::Caption("All fields are required (*).".into()));
    page
}

/// Submit the form. Nothing is sent unless the local checks pass.
pub fn create<T: Transport>(api: &ApiClient<T>, form: &CustomerForm) -> Page {
    let mut page = Page::new(TITLE);

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(err) => {
            page.push(Block::Error(validation_message(&err)));
            return page;
        }
    };

    match api.create_customer(&payload) {
        Ok(customer) => {
            page.push(Block::Success("Customer created".into()))
                .push(Block::Json(json!({
                    "id": customer.id,
                    "first_name": customer.first_name,
                    "last_name": customer.last_name,
                    "email": customer.email,
                })));
        }
        Err(ApiError::Conflict { .. }) => {
            page.push(Block::Error("This email is already registered".into()));
        }
        Err(err) => {
            page.push(error_block(&err));
        }
    }

    page
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingFields => "All fields are required".to_string(),
        ValidationError::InvalidEmail => "Invalid email".to_string(),
        ValidationError::TooLong { field, max } => {
            format!("The {} field must be at most {max} characters", field.replace('_', " "))
        }
    }
}
