//! Shared types for the RetDesk back office
//!
//! Common types used across the workspace: data models, role
//! normalization, response envelope decoding and query parameter types.

pub mod client;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Role, normalize_role};
pub use response::{CustomerIdRow, Items, Paged};
