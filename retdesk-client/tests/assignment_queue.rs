// GM assignment queue: loading, optimistic removal, rollback.

mod common;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::{client, customer_json, serve};
use retdesk_client::api;
use retdesk_client::views::AssignmentQueue;
use serde_json::{Value, json};
use shared::models::AssignmentOutcome;
use shared::request::ListQuery;
use std::collections::HashMap;

fn queue_router(assign_response: (StatusCode, Value)) -> Router {
    Router::new()
        .route(
            "/api/gm/assignable",
            get(|| async {
                Json(json!([
                    customer_json(4, "000004", "Ada", Some(1)),
                    customer_json(5, "000005", "Bora", Some(1)),
                    customer_json(6, "000006", "Cem", None),
                ]))
            }),
        )
        .route(
            "/api/ret-assignments/ret-members",
            get(|| async {
                // enveloped on this deployment
                Json(json!({"data": [{"id": 1, "full_name": "Ayşe"}, {"id": 2, "full_name": "Murat"}]}))
            }),
        )
        .route(
            "/api/ret-assignments",
            post(move || {
                let (status, body) = assign_response.clone();
                async move { (status, Json(body)) }
            }),
        )
}

#[tokio::test]
async fn load_reads_rows_and_members() {
    let base = serve(queue_router((StatusCode::CREATED, json!({"id": 1})))).await;

    let queue = AssignmentQueue::load(&client(&base), &ListQuery::default()).await.unwrap();
    assert_eq!(queue.rows.len(), 3);
    assert_eq!(queue.members.len(), 2);
    assert_eq!(queue.members[0].full_name, "Ayşe");
}

#[tokio::test]
async fn assignable_filter_params_reach_the_backend() {
    let router = Router::new().route(
        "/api/gm/assignable",
        get(|Query(p): Query<HashMap<String, String>>| async move {
            // A search term with reserved characters must arrive intact
            assert_eq!(p.get("search").map(String::as_str), Some("A&B Ltd"));
            assert_eq!(p.get("limit").map(String::as_str), Some("50"));
            Json(json!([customer_json(4, "000004", "Ada", Some(1))]))
        }),
    );
    let base = serve(router).await;

    let query = ListQuery {
        search: Some("A&B Ltd".to_string()),
        limit: Some(50),
        active: None,
    };
    let rows = api::ret::gm_assignable(&client(&base), &query).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn assign_removes_the_row_on_creation() {
    let base = serve(queue_router((
        StatusCode::CREATED,
        json!({"id": 7, "customer_id": 5, "ret_member_id": 1}),
    )))
    .await;
    let http = client(&base);

    let mut queue = AssignmentQueue::load(&http, &ListQuery::default()).await.unwrap();
    let outcome = queue.assign(&http, 5, 1).await.unwrap();
    assert_eq!(outcome, AssignmentOutcome::Created);

    let ids: Vec<i64> = queue.rows.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4, 6]);
}

#[tokio::test]
async fn idempotent_answer_counts_as_success() {
    let base = serve(queue_router((
        StatusCode::OK,
        json!({"idempotent": true, "message": "zaten atanmış"}),
    )))
    .await;
    let http = client(&base);

    let mut queue = AssignmentQueue::load(&http, &ListQuery::default()).await.unwrap();
    let outcome = queue.assign(&http, 5, 1).await.unwrap();
    assert_eq!(outcome, AssignmentOutcome::AlreadyAssigned);

    // The row stays removed
    assert!(!queue.rows.iter().any(|c| c.id == 5));
}

#[tokio::test]
async fn failed_assign_restores_the_row_at_its_position() {
    let base = serve(queue_router((
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "db locked"}),
    )))
    .await;
    let http = client(&base);

    let mut queue = AssignmentQueue::load(&http, &ListQuery::default()).await.unwrap();
    assert!(queue.assign(&http, 5, 1).await.is_err());

    let ids: Vec<i64> = queue.rows.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4, 5, 6]);
}

#[tokio::test]
async fn assigning_an_unknown_customer_is_a_validation_error() {
    let base = serve(queue_router((StatusCode::CREATED, json!({"id": 1})))).await;
    let http = client(&base);

    let mut queue = AssignmentQueue::load(&http, &ListQuery::default()).await.unwrap();
    assert!(queue.assign(&http, 999, 1).await.is_err());
    assert_eq!(queue.rows.len(), 3);
}
