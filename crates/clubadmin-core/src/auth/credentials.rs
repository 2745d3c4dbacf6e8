use anyhow::{Context, Result};
use keyring::Entry;
use tracing::warn;

use super::store::{TokenStore, TOKEN_KEY};

const SERVICE_NAME: &str = "clubadmin";

/// Token kept in the OS keychain
pub struct KeyringTokenStore {
    entry: Entry,
}

impl KeyringTokenStore {
    pub fn new() -> Result<Self> {
        Self::with_service(SERVICE_NAME)
    }

    pub fn with_service(service: &str) -> Result<Self> {
        let entry = Entry::new(service, TOKEN_KEY).context("Failed to create keyring entry")?;
        Ok(Self { entry })
    }
}

impl TokenStore for KeyringTokenStore {
    fn load(&self) -> Option<String> {
        match self.entry.get_password() {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
            Ok(_) | Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read token from keychain");
                None
            }
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        self.entry
            .set_password(token)
            .context("Failed to store token in keychain")
    }

    fn clear(&self) {
        match self.entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!(error = %e, "Failed to delete token from keychain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_clear() {
        keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
        let store = KeyringTokenStore::with_service("clubadmin-test").expect("entry");

        assert_eq!(store.load(), None);

        store.store("T1").expect("store token");
        assert_eq!(store.load().as_deref(), Some("T1"));

        store.store("  T2 ").expect("replace token");
        assert_eq!(store.load().as_deref(), Some("T2"));

        store.clear();
        assert_eq!(store.load(), None);

        // Clearing an empty entry is not an error
        store.clear();
        assert_eq!(store.load(), None);
    }
}
