//! Page-level view loaders
//!
//! Each screen is a load step (fetch + reconcile) and a pure filter
//! step over the loaded rows. Only the primary customer fetch can fail
//! a page; every derived set degrades softly (see [`crate::reconcile`]).

use crate::{ClientResult, HttpClient, api, reconcile};
use shared::models::{
    AssignmentOutcome, Customer, RetAssignmentCreate, RetMemberRef, TransactionKind,
};
use shared::request::ListQuery;
use std::collections::HashSet;

/// Client-side page size used by the list screens
pub const PAGE_SIZE: u32 = 10;

/// Filters of the Customers screen
#[derive(Debug, Clone)]
pub struct CustomerFilter {
    pub search: String,
    pub only_active: bool,
    /// "hide processed" toggle; on by default
    pub hide_processed: bool,
}

impl Default for CustomerFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            only_active: false,
            hide_processed: true,
        }
    }
}

/// Search over the fields the screens show: code, name, phone, email,
/// salesperson name
fn matches_search(customer: &Customer, search: &str) -> bool {
    let q = search.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    let haystack = [
        Some(customer.customer_code.as_str()),
        Some(customer.name.as_str()),
        customer.phone.as_deref(),
        customer.email.as_deref(),
        customer.salesperson_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();
    haystack.contains(&q)
}

/// Customers screen: the full list plus the exclusion set of customers
/// already in the retention pipeline
#[derive(Debug, Clone)]
pub struct CustomerListView {
    pub rows: Vec<Customer>,
    pub excluded: HashSet<i64>,
    /// Set when any GM/RET source answered 403; the page renders it as
    /// an inline note, filtering is just less strict
    pub permission_note: Option<String>,
}

impl CustomerListView {
    pub async fn load(http: &HttpClient) -> ClientResult<Self> {
        let rows = api::customers::list(http).await?;

        let (assignable, assigned) = tokio::join!(
            reconcile::assignable_customer_ids(http),
            reconcile::ret_assigned_customer_ids(http),
        );
        let invested = reconcile::invested_customer_ids(http, &rows, None).await;

        let permission_note = (assignable.denied || assigned.denied).then(|| {
            "GM/RET data not accessible (403); invested customers were derived \
             from transactions instead"
                .to_string()
        });

        Ok(Self {
            excluded: reconcile::exclusion_set(&invested, &assignable, &assigned),
            rows,
            permission_note,
        })
    }

    /// Apply the screen filters; page the result with
    /// [`shared::response::Paged::slice`]
    pub fn visible(&self, filter: &CustomerFilter) -> Vec<&Customer> {
        self.rows
            .iter()
            .filter(|c| !filter.only_active || c.is_active())
            .filter(|c| !filter.hide_processed || !self.excluded.contains(&c.id))
            .filter(|c| matches_search(c, &filter.search))
            .collect()
    }
}

/// Retention screen: only customers with at least one YATIRIM
/// transaction, whatever their assignment state
#[derive(Debug, Clone)]
pub struct RetentionView {
    pub rows: Vec<Customer>,
    pub invested: HashSet<i64>,
}

impl RetentionView {
    pub async fn load(http: &HttpClient) -> ClientResult<Self> {
        let rows = api::customers::list(http).await?;
        let invested =
            reconcile::invested_customer_ids(http, &rows, Some(TransactionKind::Yatirim)).await;
        Ok(Self { rows, invested })
    }

    /// Inverse predicate of the Customers screen: invested only.
    /// `only_active` defaults to on in the screen.
    pub fn visible(&self, search: &str, only_active: bool) -> Vec<&Customer> {
        self.rows
            .iter()
            .filter(|c| self.invested.contains(&c.id))
            .filter(|c| !only_active || c.is_active())
            .filter(|c| matches_search(c, search))
            .collect()
    }
}

/// GM assignment screen: assignable customers and the member list,
/// with optimistic row removal on assign
#[derive(Debug, Clone)]
pub struct AssignmentQueue {
    pub rows: Vec<Customer>,
    pub members: Vec<RetMemberRef>,
}

impl AssignmentQueue {
    pub async fn load(http: &HttpClient, query: &ListQuery) -> ClientResult<Self> {
        let (rows, members) = tokio::join!(
            api::ret::gm_assignable(http, query),
            api::ret::member_refs(http),
        );
        Ok(Self {
            rows: rows?,
            members: members?,
        })
    }

    /// Refresh just the assignable rows
    pub async fn refresh(&mut self, http: &HttpClient, query: &ListQuery) -> ClientResult<()> {
        self.rows = api::ret::gm_assignable(http, query).await?;
        Ok(())
    }

    /// Assign a customer to a retention member.
    ///
    /// The row leaves the local list before the POST and comes back at
    /// its old position if the POST fails. `AlreadyAssigned` counts as
    /// success: the row stays removed and the caller shows an
    /// informational message.
    pub async fn assign(
        &mut self,
        http: &HttpClient,
        customer_id: i64,
        ret_member_id: i64,
    ) -> ClientResult<AssignmentOutcome> {
        let position = self
            .rows
            .iter()
            .position(|c| c.id == customer_id)
            .ok_or_else(|| {
                crate::ClientError::Validation(format!(
                    "customer {customer_id} is not in the assignable list"
                ))
            })?;
        let row = self.rows.remove(position);

        let payload = RetAssignmentCreate {
            customer_id,
            ret_member_id,
            note: Some("GM atama".to_string()),
        };
        match api::ret::assign(http, &payload).await {
            Ok(outcome) => {
                if outcome == AssignmentOutcome::AlreadyAssigned {
                    tracing::info!(customer_id, "customer was already assigned");
                }
                Ok(outcome)
            }
            Err(e) => {
                // Roll the optimistic removal back
                self.rows.insert(position.min(self.rows.len()), row);
                Err(e)
            }
        }
    }
}
