//! Query parameter types
//!
//! Builders for the query strings the list endpoints accept. Only
//! present fields are emitted; free-text values are percent-encoded so
//! `&`/`=`/`#` in a search term cannot split into bogus parameters.

use crate::models::TransactionKind;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;

/// Characters that must not appear raw in a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

fn encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY_VALUE).into()
}

/// Filter for `GET /transactions`
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Inclusive start date, `YYYY-MM-DD`
    pub from: Option<String>,
    /// Inclusive end date, `YYYY-MM-DD`
    pub to: Option<String>,
    pub kind: Option<TransactionKind>,
    pub salesperson_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub limit: Option<u32>,
}

impl TransactionQuery {
    pub fn kind(kind: TransactionKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as a query string, empty when no filter is set
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(from) = &self.from {
            params.push(format!("from={}", encode(from)));
        }
        if let Some(to) = &self.to {
            params.push(format!("to={}", encode(to)));
        }
        if let Some(kind) = &self.kind {
            params.push(format!("type={}", kind.as_str()));
        }
        if let Some(id) = self.salesperson_id {
            params.push(format!("salesperson_id={id}"));
        }
        if let Some(id) = self.customer_id {
            params.push(format!("customer_id={id}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Filter for `GET /ret-members`
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub active: Option<bool>,
}

impl ListQuery {
    pub fn active_only() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(format!("search={}", encode(search)));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(active) = self.active {
            params.push(format!("active={}", if active { 1 } else { 0 }));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Date-range filter for the report endpoints
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub salesperson_id: Option<i64>,
}

impl ReportQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(from) = &self.from {
            params.push(format!("from={}", encode(from)));
        }
        if let Some(to) = &self.to {
            params.push(format!("to={}", encode(to)));
        }
        if let Some(id) = self.salesperson_id {
            params.push(format!("salesperson_id={id}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}
