//! Customer Model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Customer entity
///
/// `salesperson_name` is only populated by list/detail views that join
/// the salesperson table; plain rows leave it `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Exactly 6 digits, uniqueness enforced by the backend
    pub customer_code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub salesperson_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesperson_name: Option<String>,
    /// 0/1 flag as stored by the backend
    #[serde(default = "default_active")]
    pub is_active: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_active() -> i64 {
    1
}

impl Customer {
    /// Active flag as a bool
    pub fn is_active(&self) -> bool {
        self.is_active == 1
    }
}

/// Validation failure for customer payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerValidationError {
    #[error("customer_code must be exactly 6 digits")]
    InvalidCode,
    #[error("name is required")]
    MissingName,
    #[error("salesperson_id is required")]
    MissingSalesperson,
}

/// Create customer payload (POST /customers)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub customer_code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub salesperson_id: i64,
    pub is_active: i64,
}

impl CustomerCreate {
    /// Build a payload from raw form input, trimming fields and
    /// normalizing empty phone/email to `None`.
    pub fn from_form(
        customer_code: &str,
        name: &str,
        phone: &str,
        email: &str,
        salesperson_id: Option<i64>,
        is_active: bool,
    ) -> Result<Self, CustomerValidationError> {
        let code = customer_code.trim();
        if !is_valid_customer_code(code) {
            return Err(CustomerValidationError::InvalidCode);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(CustomerValidationError::MissingName);
        }
        let salesperson_id = salesperson_id.ok_or(CustomerValidationError::MissingSalesperson)?;

        Ok(Self {
            customer_code: code.to_string(),
            name: name.to_string(),
            phone: non_empty(phone),
            email: non_empty(email),
            salesperson_id,
            is_active: if is_active { 1 } else { 0 },
        })
    }
}

/// Update customer payload (PUT /customers/:id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salesperson_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<i64>,
}

/// `^\d{6}$` without pulling in a regex engine
pub fn is_valid_customer_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}
