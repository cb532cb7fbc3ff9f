//! `/transactions` resource

use crate::{ClientResult, HttpClient};
use shared::models::{NewTransaction, Transaction, TransactionKind, TransactionSummaryRow};
use shared::request::TransactionQuery;

/// Fetch transactions matching the filter
pub async fn list(http: &HttpClient, query: &TransactionQuery) -> ClientResult<Vec<Transaction>> {
    http.get_items(&format!("/transactions{}", query.to_query_string()))
        .await
}

/// Create a transaction. Prefer going through
/// [`TransactionEntry::submit`], which owns validation and the
/// retention fallback.
///
/// [`TransactionEntry::submit`]: crate::entry::TransactionEntry::submit
pub async fn create(http: &HttpClient, payload: &NewTransaction) -> ClientResult<Transaction> {
    http.post("/transactions", payload).await
}

/// Path of the per-customer aggregate endpoint, optionally restricted
/// to one transaction kind. Shared with the reconciler, which decodes
/// the rows more loosely.
pub fn summary_by_customer_path(kind: Option<TransactionKind>) -> String {
    match kind {
        Some(kind) => format!("/transactions/summary?groupBy=customer_id&type={}", kind.as_str()),
        None => "/transactions/summary?groupBy=customer_id".to_string(),
    }
}

/// Per-customer aggregate. Not every deployment has this endpoint;
/// callers must expect 404.
pub async fn summary_by_customer(
    http: &HttpClient,
    kind: Option<TransactionKind>,
) -> ClientResult<Vec<TransactionSummaryRow>> {
    http.get_items(&summary_by_customer_path(kind)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_path_spelling() {
        assert_eq!(
            summary_by_customer_path(None),
            "/transactions/summary?groupBy=customer_id"
        );
        assert_eq!(
            summary_by_customer_path(Some(TransactionKind::Cekim)),
            "/transactions/summary?groupBy=customer_id&type=CEKIM"
        );
    }
}
