//! Transaction Model
//!
//! Monetary amounts travel as plain JSON numbers rounded to 6 decimal
//! places; [`round6`] is the single rounding point for everything the
//! client composes.

use serde::{Deserialize, Serialize};

/// Transaction kind (deposit / withdrawal), backend wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "YATIRIM")]
    Yatirim,
    #[serde(rename = "CEKIM")]
    Cekim,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yatirim => "YATIRIM",
            Self::Cekim => "CEKIM",
        }
    }
}

/// Transaction currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "TRY")]
    Try,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "OTHER")]
    Other,
}

impl Currency {
    pub fn is_usd(&self) -> bool {
        matches!(self, Self::Usd)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Try => "TRY",
            Self::Eur => "EUR",
            Self::Other => "OTHER",
        }
    }
}

/// Transaction entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub original_amount: f64,
    pub original_currency: Currency,
    pub currency: Currency,
    /// Required and > 0 iff currency != USD, else null
    pub manual_rate_to_usd: Option<f64>,
    pub amount_usd: f64,
    /// Absent for retention-mode transactions; attribution then lives in
    /// the `[RET:<name>]` note tag
    pub salesperson_id: Option<i64>,
    pub customer_id: i64,
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Create transaction payload (POST /transactions)
///
/// `salesperson_id` must not appear in the serialized JSON at all when
/// unset; the backend distinguishes a missing key from an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub customer_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub original_amount: f64,
    pub original_currency: Currency,
    pub currency: Currency,
    pub manual_rate_to_usd: Option<f64>,
    pub amount_usd: f64,
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesperson_id: Option<i64>,
}

/// Row of `/transactions/summary?groupBy=customer_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummaryRow {
    pub customer_id: i64,
    #[serde(default)]
    pub txn_count: Option<i64>,
    #[serde(default)]
    pub total_usd: Option<f64>,
}

/// Round to 6 decimal places before transmission
pub fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round6_matches_to_fixed_semantics() {
        assert_eq!(round6(1.0), 1.0);
        assert_eq!(round6(0.123_456_789), 0.123_457);
        assert_eq!(round6(100.0 * 32.35), 3235.0);
        assert_eq!(round6(1.000_000_4), 1.0);
    }

    #[test]
    fn kind_and_currency_wire_values() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Yatirim).unwrap(),
            "\"YATIRIM\""
        );
        assert_eq!(serde_json::to_string(&Currency::Try).unwrap(), "\"TRY\"");
        let k: TransactionKind = serde_json::from_str("\"CEKIM\"").unwrap();
        assert_eq!(k, TransactionKind::Cekim);
    }

    #[test]
    fn new_transaction_omits_unset_salesperson_key() {
        let txn = NewTransaction {
            customer_id: 5,
            kind: TransactionKind::Yatirim,
            original_amount: 10.0,
            original_currency: Currency::Usd,
            currency: Currency::Usd,
            manual_rate_to_usd: None,
            amount_usd: 10.0,
            note: None,
            salesperson_id: None,
        };
        let json = serde_json::to_value(&txn).unwrap();
        assert!(json.get("salesperson_id").is_none());
        // manual_rate_to_usd stays as explicit null
        assert!(json.get("manual_rate_to_usd").unwrap().is_null());
    }
}
