//! Typed wrappers over the REST resources
//!
//! One module per backend resource; all calls go through [`HttpClient`]
//! and return shared model types.
//!
//! [`HttpClient`]: crate::HttpClient

pub mod customers;
pub mod reports;
pub mod ret;
pub mod salespersons;
pub mod transactions;
