//! Port interface for session persistence

use bitacora_domain::{Result, SessionUser};

/// Persists the logged-in user between runs
pub trait SessionStore: Send + Sync {
    /// Persist `user` as the current session
    fn save(&self, user: &SessionUser) -> Result<()>;

    /// Persisted user, or `None` when nothing usable is stored
    fn load(&self) -> Option<SessionUser>;

    /// Remove the persisted session; a no-op when none exists
    fn clear(&self) -> Result<()>;
}
