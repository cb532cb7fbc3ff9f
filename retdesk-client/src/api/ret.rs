//! Retention resources: `/ret-members`, `/ret-assignments`,
//! `/gm/assignable`

use crate::{ClientResult, HttpClient};
use reqwest::StatusCode;
use shared::models::{
    AssignmentOutcome, AssignmentResponse, Customer, RetAssignment, RetAssignmentCreate,
    RetMember, RetMemberCreate, RetMemberRef, RetMemberUpdate,
};
use shared::request::ListQuery;
use shared::response::CustomerIdRow;

// ========== Ret members ==========

/// Fetch ret members matching the filter
pub async fn members(http: &HttpClient, query: &ListQuery) -> ClientResult<Vec<RetMember>> {
    http.get_items(&format!("/ret-members{}", query.to_query_string()))
        .await
}

/// Create a ret member
pub async fn create_member(http: &HttpClient, payload: &RetMemberCreate) -> ClientResult<RetMember> {
    http.post("/ret-members", payload).await
}

/// Update a ret member
pub async fn update_member(
    http: &HttpClient,
    id: i64,
    payload: &RetMemberUpdate,
) -> ClientResult<RetMember> {
    http.put(&format!("/ret-members/{id}"), payload).await
}

/// Delete a ret member
pub async fn delete_member(http: &HttpClient, id: i64) -> ClientResult<serde_json::Value> {
    http.delete(&format!("/ret-members/{id}")).await
}

/// Lightweight member list from the assignments resource (the GM page
/// uses this one, it is readable with GM credentials only)
pub async fn member_refs(http: &HttpClient) -> ClientResult<Vec<RetMemberRef>> {
    http.get_items("/ret-assignments/ret-members").await
}

// ========== Assignments ==========

/// Fetch all retention assignments
pub async fn assignments(http: &HttpClient) -> ClientResult<Vec<RetAssignment>> {
    http.get_items("/ret-assignments").await
}

/// Fetch the assignments of one customer
pub async fn assignments_for_customer(
    http: &HttpClient,
    customer_id: i64,
) -> ClientResult<Vec<RetAssignment>> {
    http.get_items(&format!("/ret-assignments?customer_id={customer_id}"))
        .await
}

/// Assignment summary rows; field spellings vary by deployment
pub async fn assignment_summary(http: &HttpClient) -> ClientResult<Vec<CustomerIdRow>> {
    http.get_items("/ret-assignments/summary").await
}

/// Create an assignment.
///
/// 201 means a new row; 200 with `{"idempotent": true}` means the
/// customer was already assigned, which is an informational outcome,
/// not an error.
pub async fn assign(
    http: &HttpClient,
    payload: &RetAssignmentCreate,
) -> ClientResult<AssignmentOutcome> {
    // Success bodies vary (assignment row, `{idempotent}`, or nothing);
    // decode leniently
    let (status, value): (StatusCode, serde_json::Value) =
        http.post_with_status("/ret-assignments", payload).await?;
    let body: AssignmentResponse = serde_json::from_value(value).unwrap_or_default();
    if status == StatusCode::OK && body.idempotent {
        Ok(AssignmentOutcome::AlreadyAssigned)
    } else {
        Ok(AssignmentOutcome::Created)
    }
}

// ========== GM assignable view ==========

/// Backend view of invested-but-unassigned customers; `limit` and
/// `search` narrow it server-side
pub async fn gm_assignable(http: &HttpClient, query: &ListQuery) -> ClientResult<Vec<Customer>> {
    http.get_items(&format!("/gm/assignable{}", query.to_query_string()))
        .await
}
