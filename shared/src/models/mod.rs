//! Data models
//!
//! Shared between the backend API and the client crates.
//! Field names follow the backend wire format exactly.
//! All IDs are `i64`.

pub mod customer;
pub mod report;
pub mod ret_assignment;
pub mod ret_member;
pub mod role;
pub mod salesperson;
pub mod transaction;

// Re-exports
pub use customer::*;
pub use report::*;
pub use ret_assignment::*;
pub use ret_member::*;
pub use role::*;
pub use salesperson::*;
pub use transaction::*;
