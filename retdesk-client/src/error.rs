//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network/connectivity)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (400/422, or failed client-side validation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (other non-2xx)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the failure was an HTTP 403 permission denial.
    /// Drives the soft-degrade fallbacks in reconciliation.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// HTTP status of the failure, where one applies
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Backend rejected a payload over a missing `salesperson_id`.
    ///
    /// The backend has no structured code for this, so the retention
    /// fallback has to sniff the message: `salesperson_id` with an
    /// optional `_`/`-` separator, case-insensitive, or the Turkish word
    /// for salesperson. Keeping the sniff behind this one predicate makes
    /// the coupling to backend wording visible and testable in one place.
    pub fn is_salesperson_rejection(&self) -> bool {
        let msg = match self {
            Self::Validation(m) | Self::Internal(m) | Self::Forbidden(m) => m.as_str(),
            _ => return false,
        };
        let lower = msg.to_lowercase();
        if lower.contains("satışçı") || lower.contains("satisci") {
            return true;
        }
        // salesperson_id / salesperson-id / salespersonid
        lower.match_indices("salesperson").any(|(pos, _)| {
            let rest = &lower[pos + "salesperson".len()..];
            let rest = rest.strip_prefix(['_', '-']).unwrap_or(rest);
            rest.starts_with("id")
        })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
