//! `/customers` resource

use crate::{ClientResult, HttpClient};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

/// Fetch the full customer list
pub async fn list(http: &HttpClient) -> ClientResult<Vec<Customer>> {
    http.get_items("/customers").await
}

/// Create a customer. Call [`CustomerCreate::from_form`] first; the
/// backend re-validates anyway.
pub async fn create(http: &HttpClient, payload: &CustomerCreate) -> ClientResult<Customer> {
    http.post("/customers", payload).await
}

/// Update a customer
pub async fn update(
    http: &HttpClient,
    id: i64,
    payload: &CustomerUpdate,
) -> ClientResult<Customer> {
    http.put(&format!("/customers/{id}"), payload).await
}

/// Soft-delete: the backend flips `is_active` to 0, the row stays
pub async fn soft_delete(http: &HttpClient, id: i64) -> ClientResult<serde_json::Value> {
    http.delete(&format!("/customers/{id}")).await
}
