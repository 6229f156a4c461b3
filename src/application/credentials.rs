/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/

//! Credential providers
//!
//! The client never owns a token. It asks a [`TokenProvider`] on every request,
//! so a login flow elsewhere in the application can store, replace or clear the
//! token without rebuilding the client.

use crate::constants::ENV_TOKEN;
use crate::error::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Source of the bearer token attached to outgoing requests
pub trait TokenProvider: Send + Sync {
    /// Returns the current token, or `None` for an unauthenticated request
    fn token(&self) -> Option<String>;
}

/// Whitespace-only counts as absent; anything else is kept byte for byte
fn non_blank(token: String) -> Option<String> {
    if token.trim().is_empty() { None } else { Some(token) }
}

/// A fixed token decided at construction
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Provider that always returns `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(non_blank(token.into()))
    }

    /// Provider that never returns a token
    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Provider reading `var`
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(ENV_TOKEN)
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok().and_then(non_blank)
    }
}

/// In-process token slot that can be updated while clients hold it
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored token; a blank token clears the slot
    pub fn set(&self, token: impl Into<String>) {
        let token = non_blank(token.into());
        match self.slot.write() {
            Ok(mut slot) => *slot = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// Removes the stored token
    pub fn clear(&self) {
        match self.slot.write() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

impl TokenProvider for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        match self.slot.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Persistent token store backed by a single file
///
/// The file is read on every call, so a token written by another process is
/// picked up by the next request.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store backed by `path`; the file does not need to exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the token, creating parent directories as needed
    pub fn store(&self, token: &str) -> Result<(), AppError> {
        let Some(token) = non_blank(token.trim().to_string()) else {
            return Err(AppError::InvalidInput("token must not be blank".to_string()));
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!("Token stored in {}", self.path.display());
        Ok(())
    }

    /// Deletes the token file; a missing file is not an error
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TokenProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => non_blank(contents.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}
