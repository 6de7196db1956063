//! Auth store placeholder.
//!
//! # Responsibility
//! - Hold the optional signed-in user slot.
//! - Accept login/register calls and emit one diagnostic event each.
//!
//! # Invariants
//! - No credential verification happens; the user slot is never populated.
//! - Diagnostic events never carry passwords or email addresses.

use crate::model::user::{Credentials, NewUser, User};
use log::info;

#[derive(Debug, Default)]
pub struct AuthStore {
    user: Option<User>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts credentials without authenticating them.
    pub fn login(&mut self, credentials: Credentials) {
        info!(
            "event=auth_login module=auth status=stub email_present={} password_present={}",
            !credentials.email.trim().is_empty(),
            !credentials.password.is_empty()
        );
    }

    /// Forwards the login subset of `new_user` to [`AuthStore::login`].
    ///
    /// No user identity is created.
    pub fn register(&mut self, new_user: NewUser) {
        self.login(new_user.credentials());
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
