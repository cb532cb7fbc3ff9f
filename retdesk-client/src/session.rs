//! Session store
//!
//! Token and role live in one place, updated through a single setter and
//! observed through a watch channel, so every consumer sees login/logout
//! as it happens instead of re-reading ambient storage.

use shared::models::Role;
use tokio::sync::watch;

/// Current authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Shared session store with change notification
#[derive(Debug, Clone)]
pub struct Session {
    tx: watch::Sender<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionState::default());
        Self { tx }
    }

    /// Record a successful login
    pub fn set_login(&self, token: impl Into<String>, role: Option<Role>) {
        self.tx.send_replace(SessionState {
            token: Some(token.into()),
            role,
        });
    }

    /// Clear the session (logout, or a 401 observed anywhere)
    pub fn clear(&self) {
        self.tx.send_replace(SessionState::default());
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    pub fn token(&self) -> Option<String> {
        self.tx.borrow().token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.tx.borrow().role
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_and_clear_are_observable() {
        let session = Session::new();
        let mut rx = session.subscribe();

        session.set_login("tok", Some(Role::GenelMudur));
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_authenticated());
        assert_eq!(rx.borrow().role, Some(Role::GenelMudur));

        session.clear();
        rx.changed().await.unwrap();
        assert!(!rx.borrow().is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[tokio::test]
    async fn clones_share_one_state() {
        let session = Session::new();
        let other = session.clone();
        session.set_login("tok", None);
        assert_eq!(other.token().as_deref(), Some("tok"));
    }
}
