//! Current-user session persisted as a small JSON file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bitacora_core::SessionStore;
use bitacora_domain::{BitacoraError, Result, SessionUser};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// `SessionStore` backed by one JSON file holding `{id, email, name}`.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Store backed by the JSON file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the side file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn save(&self, user: &SessionUser) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(InfraError::from)?;
            }
        }

        let json = serde_json::to_string_pretty(user).map_err(InfraError::from)?;
        fs::write(&self.path, json).map_err(InfraError::from)?;
        debug!(path = %self.path.display(), user_id = user.id, "session saved");
        Ok(())
    }

    fn load(&self) -> Option<SessionUser> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session file is corrupt, ignoring");
                None
            }
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BitacoraError::Internal(format!(
                "could not remove session file {}: {e}",
                self.path.display()
            ))),
        }
    }
}
