//! `/reports` resource (GM only; expect 403 for operations managers)

use crate::{ClientResult, HttpClient};
use shared::models::{ReportSummary, SalespersonReportRow, SalespersonStats};
use shared::request::ReportQuery;

/// Totals for the period
pub async fn summary(http: &HttpClient, query: &ReportQuery) -> ClientResult<ReportSummary> {
    http.get(&format!("/reports/summary{}", query.to_query_string()))
        .await
}

/// Per-salesperson totals
pub async fn by_salesperson(
    http: &HttpClient,
    query: &ReportQuery,
) -> ClientResult<Vec<SalespersonReportRow>> {
    http.get_items(&format!("/reports/by-salesperson{}", query.to_query_string()))
        .await
}

/// Per-salesperson drilldown stats
pub async fn salesperson_stats(
    http: &HttpClient,
    query: &ReportQuery,
) -> ClientResult<Vec<SalespersonStats>> {
    http.get_items(&format!("/reports/salesperson-stats{}", query.to_query_string()))
        .await
}
