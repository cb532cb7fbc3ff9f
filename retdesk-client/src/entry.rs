//! Transaction entry: validation, payload composition, submission
//!
//! One form serves two screens. In sales mode the transaction is
//! attributed to a salesperson via `salesperson_id`. In retention mode
//! the backend has no retention-owner column, so attribution is encoded
//! as a `[RET:<name>]` tag in the note and `salesperson_id` is left out
//! of the payload entirely.

use crate::{ClientError, ClientResult, HttpClient, api};
use shared::models::{
    Currency, Customer, NewTransaction, RetMemberRef, Transaction, TransactionKind, round6,
};

/// The customer the entry is being recorded for; `salesperson_id` is the
/// customer's original salesperson, used only by the retention fallback
#[derive(Debug, Clone)]
pub struct CustomerContext {
    pub customer_id: i64,
    pub salesperson_id: Option<i64>,
}

impl From<&Customer> for CustomerContext {
    fn from(c: &Customer) -> Self {
        Self {
            customer_id: c.id,
            salesperson_id: c.salesperson_id,
        }
    }
}

/// User-entered transaction form.
///
/// `amount` and `rate_to_usd` stay as raw strings until validation;
/// comma decimal separators are accepted.
#[derive(Debug, Clone)]
pub struct TransactionEntry {
    pub customer: CustomerContext,
    pub kind: TransactionKind,
    pub amount: String,
    pub currency: Currency,
    pub rate_to_usd: String,
    pub note: String,
    /// Sales mode: selected salesperson
    pub salesperson_id: Option<i64>,
    /// Retention mode: selected retention member
    pub ret_member: Option<RetMemberRef>,
    retention: bool,
}

impl TransactionEntry {
    /// Entry in sales mode
    pub fn sales(customer: impl Into<CustomerContext>) -> Self {
        Self::new(customer.into(), false)
    }

    /// Entry in retention mode
    pub fn retention(customer: impl Into<CustomerContext>) -> Self {
        Self::new(customer.into(), true)
    }

    fn new(customer: CustomerContext, retention: bool) -> Self {
        Self {
            customer,
            kind: TransactionKind::Yatirim,
            amount: String::new(),
            currency: Currency::Usd,
            rate_to_usd: String::new(),
            note: String::new(),
            salesperson_id: None,
            ret_member: None,
            retention,
        }
    }

    pub fn is_retention(&self) -> bool {
        self.retention
    }

    /// Live USD-equivalent preview; `None` until the amount (and the
    /// rate, for non-USD) parse as positive numbers
    pub fn usd_preview(&self) -> Option<f64> {
        let amount = parse_decimal(&self.amount)?;
        if self.currency.is_usd() {
            return Some(round6(amount));
        }
        let rate = parse_decimal(&self.rate_to_usd)?;
        Some(round6(amount * rate))
    }

    /// Validate the form and compose the POST payload
    pub fn compose(&self) -> ClientResult<NewTransaction> {
        let amount = parse_decimal(&self.amount)
            .ok_or_else(|| ClientError::Validation("amount must be a positive number".into()))?;

        let rate = if self.currency.is_usd() {
            None
        } else {
            let rate = parse_decimal(&self.rate_to_usd).ok_or_else(|| {
                ClientError::Validation("rate to USD is required and must be > 0".into())
            })?;
            Some(rate)
        };

        let note = if self.retention {
            let member = self.ret_member.as_ref().ok_or_else(|| {
                ClientError::Validation("select a retention member".into())
            })?;
            Some(ret_note(member, &self.note))
        } else {
            if self.salesperson_id.is_none() {
                return Err(ClientError::Validation("select a salesperson".into()));
            }
            let trimmed = self.note.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        let amount_usd = match rate {
            None => round6(amount),
            Some(rate) => round6(amount * rate),
        };

        Ok(NewTransaction {
            customer_id: self.customer.customer_id,
            kind: self.kind,
            original_amount: round6(amount),
            original_currency: self.currency,
            currency: self.currency,
            manual_rate_to_usd: rate.map(round6),
            amount_usd,
            note,
            // retention attribution lives in the note tag only
            salesperson_id: if self.retention { None } else { self.salesperson_id },
        })
    }

    /// Validate, compose and submit.
    ///
    /// Retention mode carries the one retry in the system: if the
    /// backend rejects the payload over the missing `salesperson_id`,
    /// resubmit once with the customer's original salesperson and a
    /// `[RET-Fallback sp:<id>]` note tag. Without a prior salesperson
    /// the fallback fails with a descriptive error instead of silently
    /// degrading.
    pub async fn submit(&self, http: &HttpClient) -> ClientResult<Transaction> {
        let payload = self.compose()?;

        match api::transactions::create(http, &payload).await {
            Ok(txn) => Ok(txn),
            Err(e) if self.retention && e.is_salesperson_rejection() => {
                let fallback_sp = self.customer.salesperson_id.ok_or_else(|| {
                    ClientError::Validation(
                        "backend requires a salesperson and the customer has none; \
                         record the transaction from the Transactions screen"
                            .into(),
                    )
                })?;
                tracing::warn!(
                    customer_id = payload.customer_id,
                    salesperson_id = fallback_sp,
                    "retention submission rejected over salesperson_id, retrying with fallback"
                );

                let mut fallback = payload;
                fallback.salesperson_id = Some(fallback_sp);
                fallback.note = Some(
                    format!(
                        "[RET-Fallback sp:{fallback_sp}] {}",
                        fallback.note.as_deref().unwrap_or_default()
                    )
                    .trim()
                    .to_string(),
                );
                api::transactions::create(http, &fallback).await
            }
            Err(e) => Err(e),
        }
    }
}

/// Retention note tag: `[RET:<display name>] <note>`
fn ret_note(member: &RetMemberRef, note: &str) -> String {
    let tag = if member.full_name.trim().is_empty() {
        format!("ID:{}", member.id)
    } else {
        member.full_name.trim().to_string()
    };
    format!("[RET:{tag}] {}", note.trim()).trim().to_string()
}

/// Parse a user-entered decimal: comma separator normalized to dot,
/// must be finite and > 0
fn parse_decimal(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, sp: Option<i64>) -> CustomerContext {
        CustomerContext {
            customer_id: id,
            salesperson_id: sp,
        }
    }

    fn member(id: i64, name: &str) -> RetMemberRef {
        RetMemberRef {
            id,
            full_name: name.to_string(),
        }
    }

    #[test]
    fn decimal_parsing_accepts_comma() {
        assert_eq!(parse_decimal("32,35"), Some(32.35));
        assert_eq!(parse_decimal(" 100.5 "), Some(100.5));
        assert_eq!(parse_decimal("0"), None);
        assert_eq!(parse_decimal("-3"), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn usd_preview_matches_round6() {
        let mut entry = TransactionEntry::sales(customer(1, None));
        entry.amount = "100".into();
        assert_eq!(entry.usd_preview(), Some(100.0));

        entry.currency = Currency::Try;
        assert_eq!(entry.usd_preview(), None);
        entry.rate_to_usd = "0,0305".into();
        assert_eq!(entry.usd_preview(), Some(round6(100.0 * 0.0305)));
    }

    #[test]
    fn sales_mode_requires_salesperson() {
        let mut entry = TransactionEntry::sales(customer(1, None));
        entry.amount = "10".into();
        let err = entry.compose().unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        entry.salesperson_id = Some(3);
        let payload = entry.compose().unwrap();
        assert_eq!(payload.salesperson_id, Some(3));
        assert_eq!(payload.amount_usd, 10.0);
        assert_eq!(payload.manual_rate_to_usd, None);
    }

    #[test]
    fn non_usd_requires_rate() {
        let mut entry = TransactionEntry::sales(customer(1, None));
        entry.amount = "10".into();
        entry.currency = Currency::Eur;
        entry.salesperson_id = Some(3);
        assert!(entry.compose().is_err());

        entry.rate_to_usd = "1,08".into();
        let payload = entry.compose().unwrap();
        assert_eq!(payload.manual_rate_to_usd, Some(1.08));
        assert_eq!(payload.amount_usd, round6(10.0 * 1.08));
    }

    #[test]
    fn retention_payload_has_no_salesperson_key_and_tags_note() {
        let mut entry = TransactionEntry::retention(customer(5, Some(2)));
        entry.amount = "50".into();
        entry.ret_member = Some(member(9, "Ayşe Yılmaz"));
        entry.note = "ilk yatırım".into();

        let payload = entry.compose().unwrap();
        assert_eq!(payload.salesperson_id, None);
        assert_eq!(payload.note.as_deref(), Some("[RET:Ayşe Yılmaz] ilk yatırım"));

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("salesperson_id").is_none());
    }

    #[test]
    fn retention_requires_member() {
        let mut entry = TransactionEntry::retention(customer(5, None));
        entry.amount = "50".into();
        assert!(entry.compose().is_err());
    }

    #[test]
    fn ret_note_falls_back_to_member_id() {
        assert_eq!(ret_note(&member(7, "  "), ""), "[RET:ID:7]");
        assert_eq!(ret_note(&member(7, "Ali"), "note"), "[RET:Ali] note");
    }
}
