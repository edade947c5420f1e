// 🔐 Session State - who is logged in
// In-memory only: a restart always starts logged out.
//
// No credential verification happens here. The container records identity;
// deciding which screens that unlocks belongs to the navigator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable per-login identity
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub logged_in_at: DateTime<Utc>,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        UserIdentity {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            name: None,
            logged_in_at: Utc::now(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name if known, otherwise the part of the email before '@'
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.as_str(),
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter your email")]
    EmptyEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

// ============================================================================
// SESSION CONTAINER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<UserIdentity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any identity with a non-empty email. Replaces a previous login.
    pub fn login(&mut self, identity: UserIdentity) -> Result<(), SessionError> {
        if identity.email.trim().is_empty() {
            return Err(SessionError::EmptyEmail);
        }

        info!(email = %identity.email, id = %identity.id, "user logged in");
        self.identity = Some(identity);
        Ok(())
    }

    /// Clears the identity, returning whoever was logged in
    pub fn logout(&mut self) -> Option<UserIdentity> {
        let previous = self.identity.take();
        if let Some(identity) = &previous {
            info!(email = %identity.email, "user logged out");
        }
        previous
    }

    pub fn current_identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.identity.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state() == SessionState::LoggedIn
    }
}
