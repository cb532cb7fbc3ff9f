//! Retention Assignment Model

use serde::{Deserialize, Serialize};

/// Links one customer to one retention member.
///
/// The backend enforces at most one assignment per customer; a repeated
/// POST answers 200 with `{"idempotent": true}` instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetAssignment {
    #[serde(default)]
    pub id: Option<i64>,
    pub customer_id: i64,
    pub ret_member_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Create assignment payload (POST /ret-assignments)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetAssignmentCreate {
    pub customer_id: i64,
    pub ret_member_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Outcome of an assignment POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// 201: new assignment row created
    Created,
    /// 200 with `{"idempotent": true}`: the customer was already assigned
    AlreadyAssigned,
}

/// Body shape returned by the assignment endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentResponse {
    #[serde(default)]
    pub idempotent: bool,
}

/// Lightweight member row from `/ret-assignments/ret-members`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetMemberRef {
    pub id: i64,
    pub full_name: String,
}
