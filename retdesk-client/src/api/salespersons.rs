//! `/salespersons` resource

use crate::{ClientResult, HttpClient};
use shared::models::{Salesperson, SalespersonCreate, SalespersonUpdate};

/// Fetch all salespersons
pub async fn list(http: &HttpClient) -> ClientResult<Vec<Salesperson>> {
    http.get_items("/salespersons").await
}

/// Fetch only active salespersons (form dropdowns)
pub async fn list_active(http: &HttpClient) -> ClientResult<Vec<Salesperson>> {
    http.get_items("/salespersons?active=1").await
}

/// Create a salesperson
pub async fn create(http: &HttpClient, payload: &SalespersonCreate) -> ClientResult<Salesperson> {
    http.post("/salespersons", payload).await
}

/// Update a salesperson
pub async fn update(
    http: &HttpClient,
    id: i64,
    payload: &SalespersonUpdate,
) -> ClientResult<Salesperson> {
    http.put(&format!("/salespersons/{id}"), payload).await
}
