//! API response decoding
//!
//! The backend is not consistent about list envelopes: the same resource
//! may answer with a bare JSON array, `{"data": [...]}`, or something
//! else entirely depending on the deployment. [`Items`] is the single
//! place that heuristic lives; callers always receive a `Vec<T>`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// List envelope normalizer.
///
/// Decodes a bare array or a `{"data": [...]}` wrapper to the item list.
/// Any other shape decodes as [`Items::Other`] and yields an empty list,
/// which the tolerant reconciliation paths rely on. Endpoints that must
/// have data decode their concrete type directly instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Items<T> {
    List(Vec<T>),
    Envelope { data: Vec<T> },
    Other(serde_json::Value),
}

impl<T> Items<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::List(items) => items,
            Self::Envelope { data } => data,
            Self::Other(_) => Vec::new(),
        }
    }
}

impl<T: DeserializeOwned> Items<T> {
    /// Normalize an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Vec<T> {
        serde_json::from_value::<Items<T>>(value)
            .map(Items::into_vec)
            .unwrap_or_default()
    }
}

/// Row carrying a customer id under any of its observed spellings.
///
/// Summary endpoints disagree on the field name (`customer_id`,
/// `customerId`, plain `id`); precedence follows that order. Rows with
/// none of the three, or a non-integer value, decode to `None`.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerIdRow {
    pub customer_id: Option<i64>,
}

impl<'de> Deserialize<'de> for CustomerIdRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let customer_id = ["customer_id", "customerId", "id"]
            .iter()
            .find_map(|key| value.get(key))
            .and_then(serde_json::Value::as_i64);
        Ok(Self { customer_id })
    }
}

/// Client-side page slice over an in-memory list
///
/// The list views fetch everything and page locally (page size 10 in the
/// original screens). Page numbers are 1-based and clamped.
#[derive(Debug, Clone)]
pub struct Paged<'a, T> {
    pub items: &'a [T],
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
}

impl<'a, T> Paged<'a, T> {
    pub fn slice(items: &'a [T], page: u32, per_page: u32) -> Self {
        let total = items.len();
        let per_page = per_page.max(1);
        let total_pages = (total.div_ceil(per_page as usize) as u32).max(1);
        let page = page.clamp(1, total_pages);
        let start = ((page - 1) * per_page) as usize;
        let end = (start + per_page as usize).min(total);
        Self {
            items: &items[start.min(total)..end],
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_decodes_bare_array() {
        let v: Items<i64> = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(v.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn items_decodes_data_envelope() {
        let v: Items<i64> = serde_json::from_value(json!({"data": [4, 5]})).unwrap();
        assert_eq!(v.into_vec(), vec![4, 5]);
    }

    #[test]
    fn items_tolerates_unexpected_shapes() {
        assert!(Items::<i64>::from_value(json!({"message": "ok"})).is_empty());
        assert!(Items::<i64>::from_value(json!(null)).is_empty());
        assert!(Items::<i64>::from_value(json!("text")).is_empty());
    }

    #[test]
    fn customer_id_row_spellings() {
        let rows: Vec<CustomerIdRow> = serde_json::from_value(json!([
            {"customer_id": 1},
            {"customerId": 2},
            {"id": 3},
            {"name": "no id"},
            {"customer_id": "not a number"},
        ]))
        .unwrap();
        let ids: Vec<Option<i64>> = rows.into_iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3), None, None]);
    }

    #[test]
    fn customer_id_row_prefers_snake_case() {
        let row: CustomerIdRow =
            serde_json::from_value(json!({"id": 9, "customer_id": 4})).unwrap();
        assert_eq!(row.customer_id, Some(4));
    }

    #[test]
    fn paged_slicing_and_clamping() {
        let items: Vec<i64> = (1..=25).collect();
        let p = Paged::slice(&items, 3, 10);
        assert_eq!(p.items, &[21, 22, 23, 24, 25]);
        assert_eq!(p.total_pages, 3);

        // Page past the end clamps to the last page
        let p = Paged::slice(&items, 99, 10);
        assert_eq!(p.page, 3);

        // Empty list still reports one page
        let empty: Vec<i64> = vec![];
        let p = Paged::slice(&empty, 1, 10);
        assert_eq!(p.total_pages, 1);
        assert!(p.items.is_empty());
    }
}
