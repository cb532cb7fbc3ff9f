//! RetDesk Client - typed HTTP client for the back-office API
//!
//! Wraps the REST backend behind typed resource modules, plus the
//! customer-set reconciliation, transaction entry composition and the
//! page-level view loaders.

pub mod api;
pub mod auth;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod reconcile;
pub mod session;
pub mod views;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, SessionState};

// Re-export shared types for convenience
pub use shared::client::{CurrentUser, LoginRequest, LoginResponse};
pub use shared::models;
