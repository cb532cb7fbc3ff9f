// Shared mock-backend plumbing for the integration tests.

use axum::Router;
use retdesk_client::{ClientConfig, HttpClient};
use serde_json::{Value, json};

/// Serve a router on an ephemeral port, returning its base URL
pub async fn serve(router: Router) -> String {
    // RUST_LOG-driven output for debugging test failures
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock backend");
    });
    format!("http://{addr}")
}

/// Client pointed at the mock backend
pub fn client(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url)
        .with_token("test-token")
        .build_http_client()
}

/// Customer row as the backend serializes it
#[allow(dead_code)]
pub fn customer_json(id: i64, code: &str, name: &str, salesperson_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "customer_code": code,
        "name": name,
        "phone": null,
        "email": null,
        "salesperson_id": salesperson_id,
        "is_active": 1
    })
}

/// Transaction row as the backend serializes it
#[allow(dead_code)]
pub fn transaction_json(id: i64, customer_id: i64) -> Value {
    json!({
        "id": id,
        "type": "YATIRIM",
        "original_amount": 100.0,
        "original_currency": "USD",
        "currency": "USD",
        "manual_rate_to_usd": null,
        "amount_usd": 100.0,
        "salesperson_id": 1,
        "customer_id": customer_id,
        "note": null
    })
}
