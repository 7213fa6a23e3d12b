use crate::api::ApiClient;
use crate::render::{Block, Page};
use crate::transport::Transport;
use crate::views::connection_detail;

/// Customer count and API health. The two calls are independent: a failure
/// in one still lets the other render.
pub fn home<T: Transport>(api: &ApiClient<T>) -> Page {
    let mut page = Page::new("Welcome to customer management");

    page.push(Block::Subheader("Statistics".into()));
    match api.list_customers() {
        Ok(customers) => {
            page.push(Block::Metric {
                label: "Total customers".into(),
                value: customers.len().to_string(),
            });
        }
        Err(err) if err.is_connection() => {
            page.push(Block::Error(format!("API connection error: {}", connection_detail(&err))));
        }
        Err(_) => {
            page.push(Block::Error("Could not load statistics".into()));
        }
    }

    page.push(Block::Subheader("API health".into()));
    match api.health_check() {
        Ok(health) => {
            page.push(Block::Success("API operational".into()));
            page.push(Block::Json(health.0));
        }
        Err(err) if err.is_connection() => {
            page.push(Block::Error(format!("Error: {}", connection_detail(&err))));
        }
        Err(_) => {
            page.push(Block::Error("API unavailable".into()));
        }
    }

    page
}
