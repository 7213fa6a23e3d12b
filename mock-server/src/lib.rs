use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    customers: BTreeMap<u64, Customer>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/health", get(health))
        .route("/clients", get(list_customers).post(create_customer))
        .route("/clients/{id}", get(get_customer).delete(delete_customer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn detail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": message })))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_customers(State(db): State<Db>) -> Json<Vec<Customer>> {
    let store = db.read().await;
    Json(store.customers.values().cloned().collect())
}

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<CreateCustomer>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    validate(&input)?;
    let mut store = db.write().await;
    if store.customers.values().any(|c| c.email == input.email) {
        return Err(detail(StatusCode::CONFLICT, "Email already registered"));
    }
    store.next_id += 1;
    let customer = Customer {
        id: store.next_id,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
    };
    store.customers.insert(customer.id, customer.clone());
    tracing::debug!(id = customer.id, "customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Customer>> {
    let store = db.read().await;
    store
        .customers
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Client not found"))
}

async fn delete_customer(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    store
        .customers
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Client not found"))
}

fn validate(input: &CreateCustomer) -> ApiResult<()> {
    let fields = [
        ("first_name", &input.first_name, 100),
        ("last_name", &input.last_name, 100),
        ("email", &input.email, 255),
    ];
    for (name, value, max) in fields {
        if value.is_empty() || value.chars().count() > max {
            return Err(detail(
                StatusCode::UNPROCESSABLE_ENTITY,
                &format!("{name} must be 1 to {max} characters"),
            ));
        }
    }
    if !input.email.contains('@') {
        return Err(detail(StatusCode::UNPROCESSABLE_ENTITY, "email is not valid"));
    }
    Ok(())
}
