//! Explicit login session
//!
//! A [`Session`] pairs the persisted session record with the in-memory
//! current user. Front-ends own one value and pass it where needed.

pub mod ports;

use std::sync::Arc;

use bitacora_domain::{Result, SessionUser, User};
use tracing::{info, warn};

pub use ports::SessionStore;

use crate::credentials::UserRepository;

/// Current login state backed by a [`SessionStore`]
pub struct Session {
    store: Arc<dyn SessionStore>,
    current: Option<SessionUser>,
}

impl Session {
    /// Start with no user, ignoring anything persisted
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store, current: None }
    }

    /// Resume the user persisted by a previous run, if any.
    ///
    /// The persisted record is only a hint: the user is looked up again by
    /// email and the stored row replaces it. A record naming an unknown user
    /// is discarded and the side file removed.
    pub fn restore(store: Arc<dyn SessionStore>, users: &dyn UserRepository) -> Self {
        let current = store.load().and_then(|persisted| {
            match users.find_by_email(&persisted.email) {
                Ok(Some(stored)) => {
                    info!(user_id = stored.user.id, "Session restored");
                    Some(SessionUser::from(&stored.user))
                }
                Ok(None) => {
                    warn!(email = %persisted.email, "Discarding session of unknown user");
                    if let Err(err) = store.clear() {
                        warn!(error = %err, "Failed to remove stale session file");
                    }
                    None
                }
                Err(err) => {
                    warn!(error = %err, "Could not verify persisted session");
                    None
                }
            }
        });
        Self { store, current }
    }

    /// Mark `user` as logged in and persist it
    pub fn login(&mut self, user: &User) -> Result<()> {
        let session_user = SessionUser::from(user);
        self.store.save(&session_user)?;
        info!(user_id = session_user.id, "Session started");
        self.current = Some(session_user);
        Ok(())
    }

    /// Forget the current user and remove the persisted record
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        if let Some(user) = self.current.take() {
            info!(user_id = user.id, "Session ended");
        }
        Ok(())
    }

    /// Logged-in user, if any
    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    /// Whether a user is logged in
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
