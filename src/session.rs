//! Persisted login session.
//!
//! One TOML file under the user's config directory holds the
//! authenticated user. Absence and a file that fails to parse both mean
//! logged out; a broken file is removed rather than surfaced. No network
//! validation happens on load: a stored session is trusted until an API
//! call fails.

use std::path::PathBuf;

use docket_core::{DocketError, DocketResult, User};

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at ~/.config/docket/session.toml
    pub fn default_location() -> DocketResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DocketError::Config("Could not determine config directory".into()))?;

        Ok(SessionStore { path: config_dir.join("docket").join("session.toml") })
    }

    pub fn at(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// The logged-in user, if a valid session file exists.
    pub fn load(&self) -> Option<User> {
        let contents = std::fs::read_to_string(&self.path).ok()?;

        match toml::from_str(&contents) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "discarding unreadable session file: {err}");
                let _ = std::fs::remove_file(&self.path);
                None
            }
        }
    }

    pub fn save(&self, user: &User) -> DocketResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(user).map_err(|e| DocketError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, contents)?;

        // Owner-only: the file identifies the user to the rest of the CLI.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    pub fn clear(&self) -> DocketResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
