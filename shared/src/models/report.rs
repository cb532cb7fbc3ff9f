//! Report Models (GM pages)

use serde::{Deserialize, Serialize};

/// `/reports/summary` row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default)]
    pub total_yatirim_usd: f64,
    #[serde(default)]
    pub total_cekim_usd: f64,
    #[serde(default)]
    pub net_usd: f64,
    #[serde(default)]
    pub txn_count: i64,
}

/// `/reports/by-salesperson` row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalespersonReportRow {
    pub salesperson_id: i64,
    #[serde(default)]
    pub salesperson_name: Option<String>,
    #[serde(default)]
    pub total_yatirim_usd: f64,
    #[serde(default)]
    pub total_cekim_usd: f64,
    #[serde(default)]
    pub net_usd: f64,
    #[serde(default)]
    pub txn_count: i64,
}

/// `/reports/salesperson-stats` row (per-salesperson drilldown)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalespersonStats {
    pub salesperson_id: i64,
    #[serde(default)]
    pub customer_count: i64,
    #[serde(default)]
    pub invested_customer_count: i64,
    #[serde(default)]
    pub total_yatirim_usd: f64,
    #[serde(default)]
    pub total_cekim_usd: f64,
}
