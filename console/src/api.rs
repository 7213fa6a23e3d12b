//! The five API operations, each a single round-trip.
//!
//! `ApiClient` pairs the core's request builder/parser with a `Transport`.
//! Transport failures become `ApiError::Connection`; nothing is retried.

use customer_core::{
    ApiError, CreateCustomer, Customer, CustomerClient, HealthStatus, HttpRequest, HttpResponse,
};
use tracing::debug;

use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    client: CustomerClient,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: CustomerClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        let response = self.send(self.client.build_list_customers())?;
        self.client.parse_list_customers(response)
    }

    pub fn get_customer(&self, id: u64) -> Result<Customer, ApiError> {
        let response = self.send(self.client.build_get_customer(id))?;
        self.client.parse_get_customer(response)
    }

    pub fn create_customer(&self, input: &CreateCustomer) -> Result<Customer, ApiError> {
        let request = self.client.build_create_customer(input)?;
        let response = self.send(request)?;
        self.client.parse_create_customer(response)
    }

    pub fn delete_customer(&self, id: u64) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_customer(id))?;
        self.client.parse_delete_customer(response)
    }

    pub fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let response = self.send(self.client.build_health_check())?;
        self.client.parse_health_check(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        match self.transport.execute(&request) {
            Ok(response) => {
                debug!(status = response.status, "received response");
                Ok(response)
            }
            Err(err) => {
                debug!(error = %err, "request failed");
                Err(ApiError::Connection(err.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use customer_core::HttpMethod;

    #[test]
    fn transport_failure_becomes_connection_error() {
        let transport = ScriptedTransport::new().fail("connection refused");
        let api = ApiClient::new("http://api.test", &transport);

        let err = api.list_customers().unwrap_err();
        assert_eq!(err, ApiError::Connection("connection refused".to_string()));
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn create_sends_one_post() {
        let transport = ScriptedTransport::new().respond(
            201,
            r#"{"id":1,"first_name":"A","last_name":"B","email":"a@b.c"}"#,
        );
        let api = ApiClient::new("http://api.test/", &transport);

        let customer = api
            .create_customer(&CreateCustomer {
                first_name: "A".into(),
                last_name: "B".into(),
                email: "a@b.c".into(),
            })
            .unwrap();
        assert_eq!(customer.id, 1);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://api.test/clients");
    }

    #[test]
    fn health_check_hits_health_endpoint() {
        let transport = ScriptedTransport::new().respond(200, r#"{"status":"ok"}"#);
        let api = ApiClient::new("http://api.test", &transport);

        assert_eq!(api.health_check().unwrap().0["status"], "ok");
        assert_eq!(transport.requests()[0].url, "http://api.test/health");
    }

    #[test]
    fn delete_maps_not_found() {
        let transport = ScriptedTransport::new().respond(404, "");
        let api = ApiClient::new("http://api.test", &transport);

        assert!(matches!(
            api.delete_customer(3),
            Err(ApiError::NotFound { .. })
        ));
    }
}
