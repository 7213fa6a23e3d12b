use crate::api::ApiClient;
use crate::render::{Block, Page};
use crate::transport::Transport;
use crate::views::error_block;

/// All customers, one row each. Refreshing is just calling this again.
pub fn list<T: Transport>(api: &ApiClient<T>) -> Page {
    let mut page = Page::new("Customer list");

    match api.list_customers() {
        Ok(customers) if customers.is_empty() => {
            page.push(Block::Info("No customers registered yet.".into()));
        }
        Ok(customers) => {
            page.push(Block::Success(format!("{} customer(s) found", customers.len())));
            for customer in customers {
                page.push(Block::Row(customer));
                page.push(Block::Separator);
            }
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
    use customer_core::Customer;

    #[test]
    fn empty_list_is_informational() {
        let transport = ScriptedTransport::new().respond(200, "[]");
        let page = list(&ApiClient::new("http://api.test", &transport));

        assert_eq!(page.messages(), vec!["No customers registered yet."]);
        assert!(!page.has_error());
    }

    #[test]
    fn each_customer_gets_a_row() {
        let transport = ScriptedTransport::new().respond(
            200,
            r#"[{"id":1,"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}]"#,
        );
        let page = list(&ApiClient::new("http://api.test", &transport));

        assert_eq!(page.messages(), vec!["1 customer(s) found"]);
        assert!(page.blocks.contains(&Block::Row(Customer {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        })));
    }

    #[test]
    fn server_error_shows_status_and_body() {
        let transport = ScriptedTransport::new().respond(502, "Bad Gateway");
        let page = list(&ApiClient::new("http://api.test", &transport));

        assert_eq!(page.messages(), vec!["Error 502: Bad Gateway"]);
    }

    #[test]
    fn malformed_body_is_a_connection_error() {
        let transport = ScriptedTransport::new().respond(200, "<html>");
        let page = list(&ApiClient::new("http://api.test", &transport));

        assert!(page.messages()[0].starts_with("Connection error:"));
    }

    #[test]
    fn refresh_refetches() {
        let transport = ScriptedTransport::new()
            .respond(200, "[]")
            .respond(200, r#"[{"id":4,"first_name":"A","last_name":"B","email":"a@b"}]"#);
        let api = ApiClient::new("http://api.test", &transport);

        assert_eq!(list(&api).messages(), vec!["No customers registered yet."]);
        assert_eq!(list(&api).messages(), vec!["1 customer(s) found"]);
        assert_eq!(transport.calls(), 2);
    }
}
