use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Key the credential is stored under, in every backend.
pub const TOKEN_KEY: &str = "token";

/// Durable storage for the bearer token.
///
/// `load` is called on every request and every session check, so nothing
/// above this trait keeps its own copy of the token. Anything unreadable or
/// blank counts as "no credential".
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    fn store(&self, token: &str) -> Result<()>;

    /// Remove the credential. Failures are logged, never returned.
    fn clear(&self);
}

fn normalize(raw: &str) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Token kept in a single file named `token` inside the session directory
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => normalize(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read token file, treating as signed out"
                );
                None
            }
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create session directory {}", self.dir.display()))?;
        std::fs::write(self.path(), token).context("Failed to write token file")?;
        debug!(path = %self.path().display(), "Token saved");
        Ok(())
    }

    fn clear(&self) {
        let path = self.path();
        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = %path.display(), "Token removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove token file"),
        }
    }
}

/// In-process token storage. Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        let slot = self.slot.read().unwrap_or_else(|p| p.into_inner());
        slot.as_deref().and_then(normalize)
    }

    fn store(&self, token: &str) -> Result<()> {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().join("session"));

        assert_eq!(store.load(), None);
        store.store("T1").expect("store token");
        assert_eq!(store.load().as_deref(), Some("T1"));
        assert!(store.path().ends_with("session/token"));

        store.clear();
        assert_eq!(store.load(), None);
        // Clearing twice is fine
        store.clear();
    }

    #[test]
    fn test_file_store_blank_is_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().to_path_buf());
        std::fs::write(store.path(), "  \n").expect("write blank token");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_unreadable_is_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().to_path_buf());
        // A directory where the file should be cannot be read as a string
        std::fs::create_dir_all(store.path()).expect("create dir at token path");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.store("abc").expect("memory store");
        assert_eq!(other.load().as_deref(), Some("abc"));
        other.clear();
        assert_eq!(store.load(), None);
    }
}
