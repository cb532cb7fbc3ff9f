//! Salesperson Model

use serde::{Deserialize, Serialize};

/// Salesperson entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salesperson {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: i64,
}

fn default_active() -> i64 {
    1
}

impl Salesperson {
    pub fn is_active(&self) -> bool {
        self.is_active == 1
    }

    /// Display label as the forms render it: "Name (CODE)"
    pub fn display(&self) -> String {
        match &self.code {
            Some(code) if !code.is_empty() => format!("{} ({})", self.name, code),
            _ => self.name.clone(),
        }
    }
}

/// Create salesperson payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalespersonCreate {
    pub name: String,
    pub code: Option<String>,
    pub is_active: i64,
}

/// Update salesperson payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalespersonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<i64>,
}
