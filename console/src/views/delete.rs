use customer_core::ApiError;

use crate::api::ApiClient;
use crate::render::{Block, Page};
use crate::transport::Transport;
use crate::views::error_block;
use crate::views::find::NOT_FOUND;

const TITLE: &str = "Delete a customer";
const IRREVERSIBLE: &str = "Warning: this action cannot be undone!";

/// Shown before the ID is entered.
pub fn delete_warning() -> Page {
    let mut page = Page::new(TITLE);
    page.push(Block::Warning(IRREVERSIBLE.into()));
    page
}

/// Deletes immediately; there is no second confirmation.
pub fn delete<T: Transport>(api: &ApiClient<T>, id: u64) -> Page {
    let mut page = delete_warning();

    match api.delete_customer(id) {
        Ok(()) => {
            page.push(Block::Success("Customer deleted".into()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use customer_core::HttpMethod;

    #[test]
    fn no_content_is_success_with_a_single_call() {
        let transport = ScriptedTransport::new().respond(204, "");
        let page = delete(&ApiClient::new("http://api.test", &transport), 7);

        assert_eq!(page.messages(), vec![IRREVERSIBLE, "Customer deleted"]);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(requests[0].url, "http://api.test/clients/7");
    }

    #[test]
    fn missing_customer_is_a_notice() {
        let transport = ScriptedTransport::new().respond(404, "");
        let page = delete(&ApiClient::new("http://api.test", &transport), 7);

        assert_eq!(page.messages(), vec![IRREVERSIBLE, NOT_FOUND]);
        assert!(!page.has_error());
    }

    #[test]
    fn unexpected_status_is_generic() {
        let transport = ScriptedTransport::new().respond(200, "{}");
        let page = delete(&ApiClient::new("http://api.test", &transport), 7);

        assert_eq!(page.messages(), vec![IRREVERSIBLE, "Error 200: {}"]);
    }

    #[test]
    fn timeout_is_a_connection_error() {
        let transport = ScriptedTransport::new().fail("timeout: global");
        let page = delete(&ApiClient::new("http://api.test", &transport), 7);

        assert_eq!(
            page.messages(),
            vec![IRREVERSIBLE, "Connection error: timeout: global"]
        );
    }
}
