//! Customer set reconciliation
//!
//! The list screens need three derived id sets: customers with a
//! retention assignment, customers sitting in the GM assignable view,
//! and customers who have invested. Each source can be missing or
//! forbidden depending on the deployment and the caller's role, so every
//! fetch degrades through fallbacks and never fails the page: worst case
//! is an empty set and a `denied` note, which only makes the filtering
//! less strict.

use crate::{HttpClient, api};
use shared::models::{Customer, TransactionKind};
use shared::request::{ListQuery, TransactionQuery};
use shared::response::CustomerIdRow;
use std::collections::HashSet;

/// Cap on tier-2 raw transaction fetches
const RAW_TXN_LIMIT: u32 = 2000;

/// Cap on tier-3 per-customer probes; bounds the request fan-out when a
/// backend has neither the summary endpoint nor a readable full list
const PROBE_LIMIT: usize = 100;

/// A derived id set plus whether any source refused us with a 403
#[derive(Debug, Clone, Default)]
pub struct IdSet {
    pub ids: HashSet<i64>,
    pub denied: bool,
}

impl IdSet {
    fn denied_empty(denied: bool) -> Self {
        Self {
            ids: HashSet::new(),
            denied,
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }
}

fn ids_from_rows(rows: Vec<CustomerIdRow>) -> HashSet<i64> {
    rows.into_iter().filter_map(|r| r.customer_id).collect()
}

/// Customer ids that already have a retention assignment.
///
/// `/ret-assignments` preferred; `/ret-assignments/summary` (with its
/// flexible field spellings) on failure; empty set if both fail.
pub async fn ret_assigned_customer_ids(http: &HttpClient) -> IdSet {
    match api::ret::assignments(http).await {
        Ok(rows) => IdSet {
            ids: rows.into_iter().map(|a| a.customer_id).collect(),
            denied: false,
        },
        Err(e) => {
            let denied = e.is_permission_denied();
            tracing::debug!(error = %e, denied, "ret-assignments unavailable, trying summary");
            match api::ret::assignment_summary(http).await {
                Ok(rows) => IdSet {
                    ids: ids_from_rows(rows),
                    denied,
                },
                Err(e2) => {
                    tracing::debug!(error = %e2, "ret-assignments summary unavailable too");
                    IdSet::denied_empty(denied)
                }
            }
        }
    }
}

/// Customer ids in the GM assignable view (invested, awaiting a
/// retention assignment). Single source; empty set on failure.
pub async fn assignable_customer_ids(http: &HttpClient) -> IdSet {
    match api::ret::gm_assignable(http, &ListQuery::default()).await {
        Ok(rows) => IdSet {
            ids: rows.into_iter().map(|c| c.id).collect(),
            denied: false,
        },
        Err(e) => {
            let denied = e.is_permission_denied();
            tracing::debug!(error = %e, denied, "gm/assignable unavailable");
            IdSet::denied_empty(denied)
        }
    }
}

/// Customer ids with at least one transaction (of `kind`, when given).
///
/// Three tiers:
/// 1. `/transactions/summary?groupBy=customer_id` (pre-aggregated)
/// 2. raw `/transactions?limit=2000`, distinct `customer_id`
/// 3. one `limit=1` existence probe per customer, first 100 customers
///
/// Tier 3 exists because some deployments expose neither the aggregate
/// endpoint nor a role-readable full list; the probe cap keeps the cost
/// bounded. Individual probe failures are ignored.
pub async fn invested_customer_ids(
    http: &HttpClient,
    customers: &[Customer],
    kind: Option<TransactionKind>,
) -> HashSet<i64> {
    // 1) summary
    let summary_path = api::transactions::summary_by_customer_path(kind);
    match http.get_items::<CustomerIdRow>(&summary_path).await {
        Ok(rows) => return ids_from_rows(rows),
        Err(e) => {
            tracing::debug!(error = %e, "transactions summary unavailable, trying raw list");
        }
    }

    // 2) raw transaction list
    let mut query = TransactionQuery::default().with_limit(RAW_TXN_LIMIT);
    query.kind = kind;
    match api::transactions::list(http, &query).await {
        Ok(rows) => return rows.into_iter().map(|t| t.customer_id).collect(),
        Err(e) => {
            tracing::debug!(error = %e, "transaction list unavailable, probing per customer");
        }
    }

    // 3) bounded per-customer probe
    let mut ids = HashSet::new();
    for customer in customers.iter().take(PROBE_LIMIT) {
        let mut probe = TransactionQuery::default()
            .with_customer(customer.id)
            .with_limit(1);
        probe.kind = kind;
        match api::transactions::list(http, &probe).await {
            Ok(rows) if !rows.is_empty() => {
                ids.insert(customer.id);
            }
            Ok(_) => {}
            Err(_) => {}
        }
    }
    ids
}

/// Union of the three sets: every customer who has progressed into any
/// later stage of the retention pipeline. The Customers page hides these
/// when "hide processed" is on; the Retention page uses the *invested*
/// set alone as an inclusion predicate instead.
pub fn exclusion_set(
    invested: &HashSet<i64>,
    assignable: &IdSet,
    assigned: &IdSet,
) -> HashSet<i64> {
    invested
        .iter()
        .chain(assignable.ids.iter())
        .chain(assigned.ids.iter())
        .copied()
        .collect()
}
