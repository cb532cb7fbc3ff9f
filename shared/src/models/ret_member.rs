//! Retention Team Member Model

use serde::{Deserialize, Serialize};

/// Retention-team staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetMember {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub active: i64,
}

fn default_active() -> i64 {
    1
}

impl RetMember {
    pub fn is_active(&self) -> bool {
        self.active == 1
    }
}

/// Create ret member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetMemberCreate {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: i64,
}

/// Update ret member payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetMemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
}
