//! Auth flows: login, JWT role extraction, role resolution
//!
//! The JWT payload is decoded, not verified; the backend is trusted to
//! have signed what it issued. The decoded role is only used to pick
//! which screens to offer, every data access is re-checked server-side.

use crate::{ClientError, ClientResult, HttpClient, Session};
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use shared::client::{CurrentUser, LoginRequest, LoginResponse};
use shared::models::Role;

/// Login and record the session.
///
/// The role comes from the response body when present, else from the
/// JWT payload.
pub async fn login(
    http: &HttpClient,
    session: &Session,
    username: &str,
    password: &str,
) -> ClientResult<LoginResponse> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = http.post("/auth/login", &request).await?;
    if response.token.is_empty() {
        return Err(ClientError::InvalidResponse("missing token".to_string()));
    }

    let role = response
        .role
        .as_deref()
        .and_then(Role::parse)
        .or_else(|| decode_jwt_role(&response.token).as_deref().and_then(Role::parse));
    session.set_login(&response.token, role);
    Ok(response)
}

/// Logout: drop the session state. The token is stateless server-side.
pub fn logout(session: &Session) {
    session.clear();
}

/// Extract the raw role claim from a JWT without verifying it.
///
/// Returns `None` on any malformed token rather than erroring; the
/// caller falls back to `/auth/me`.
pub fn decode_jwt_role(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims
        .get("role")
        .or_else(|| claims.get("claims").and_then(|c| c.get("role")))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Resolve the current role: JWT payload first, then the backend
/// "who am I" call, then whatever the session already holds.
///
/// A 401 from `/auth/me` clears the session. Network failures fall back
/// to the stored role.
pub async fn resolve_role(http: &HttpClient, session: &Session) -> Option<Role> {
    if let Some(token) = session.token()
        && let Some(role) = decode_jwt_role(&token).as_deref().and_then(Role::parse)
    {
        return Some(role);
    }

    match http.get::<CurrentUser>("/auth/me").await {
        Ok(me) => {
            let role = Role::parse(&me.role);
            if let Some(role) = role
                && let Some(token) = session.token()
            {
                session.set_login(token, Some(role));
            }
            role
        }
        Err(ClientError::Unauthorized) => {
            tracing::warn!("token rejected by /auth/me, clearing session");
            session.clear();
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "role lookup failed, using stored role");
            session.role()
        }
    }
}
