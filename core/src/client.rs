//! Stateless HTTP request builder and response parser for the customer API.
//!
//! # Design
//! `CustomerClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::status::StatusClass;
use crate::types::{CreateCustomer, Customer, HealthStatus};

/// Synchronous, stateless client for the customer API.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    base_url: String,
}

impl CustomerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_customers(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/clients")
    }

    pub fn build_get_customer(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/clients/{id}"))
    }

    pub fn build_create_customer(&self, input: &CreateCustomer) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut req = self.request(HttpMethod::Post, "/clients");
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }

    pub fn build_delete_customer(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/clients/{id}"))
    }

    pub fn build_health_check(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/health")
    }

    pub fn parse_list_customers(&self, response: HttpResponse) -> Result<Vec<Customer>, ApiError> {
        expect_status(&response, StatusClass::Ok)?;
        decode(&response.body)
    }

    pub fn parse_get_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        expect_status(&response, StatusClass::Ok)?;
        decode(&response.body)
    }

    pub fn parse_create_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        expect_status(&response, StatusClass::Created)?;
        decode(&response.body)
    }

    /// 204 carries no body; whatever the server sent is ignored.
    pub fn parse_delete_customer(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, StatusClass::NoContent)
    }

    pub fn parse_health_check(&self, response: HttpResponse) -> Result<HealthStatus, ApiError> {
        expect_status(&response, StatusClass::Ok)?;
        decode(&response.body)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map any status other than `expected` to the matching `ApiError` variant.
fn expect_status(response: &HttpResponse, expected: StatusClass) -> Result<(), ApiError> {
    let actual = StatusClass::from_code(response.status);
    if actual == expected {
        return Ok(());
    }
    let body = response.body.clone();
    Err(match actual {
        StatusClass::NotFound => ApiError::NotFound { body },
        StatusClass::Conflict => ApiError::Conflict { body },
        other => ApiError::Server {
            status: other.code(),
            body,
        },
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
