use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::api::error::extract_message;
use crate::api::{ApiClient, ApiError};

use super::{Route, TokenStore};

/// Authentication endpoint, relative to the base URL
const LOGIN_PATH: &str = "auth/login";

/// Shown when a login response has neither a token nor a message
const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    fn from_token(token: Option<&str>) -> Self {
        if token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Owns the login/logout mutation of the credential and derives the
/// session state from storage on every read.
pub struct SessionGuard {
    store: Arc<dyn TokenStore>,
    api: ApiClient,
    state_tx: watch::Sender<SessionState>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn TokenStore>, api: ApiClient) -> Self {
        let initial = SessionState::from_token(store.load().as_deref());
        debug!(?initial, "Session guard starting");
        let (state_tx, _) = watch::channel(initial);
        Self {
            store,
            api,
            state_tx,
        }
    }

    /// Exchange an identifier and secret for a token.
    ///
    /// Only a response carrying a token changes anything. Every other
    /// outcome leaves storage and state as they were.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), ApiError> {
        let request = LoginRequest {
            email: identifier,
            password: secret,
        };

        let body = match self.api.post_text(LOGIN_PATH, &request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Login request failed");
                return Err(e);
            }
        };

        // A 2xx body need not be JSON; plain text is a rejection message
        let parsed = serde_json::from_str::<serde_json::Value>(&body).ok();
        let token = parsed
            .as_ref()
            .and_then(|v| v.get("token"))
            .and_then(|t| t.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let Some(token) = token else {
            let message =
                extract_message(&body).unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
            warn!(reason = %message, "Login response carried no token");
            return Err(ApiError::Rejected { message });
        };

        self.store.store(token).map_err(|e| {
            warn!(error = %e, "Failed to persist token");
            ApiError::Storage(e.to_string())
        })?;

        self.publish(SessionState::Authenticated);
        info!("Login successful");
        Ok(())
    }

    /// Drop the credential. Safe to call in any state.
    pub fn logout(&self) {
        self.store.clear();
        self.publish(SessionState::Unauthenticated);
        info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some()
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_token(self.store.load().as_deref())
    }

    /// Re-read storage and broadcast if it no longer matches the last
    /// published state (e.g. the token was removed by another process).
    pub fn check(&self) -> SessionState {
        let current = self.state();
        let previous = *self.state_tx.borrow();
        if previous != current {
            if previous.is_authenticated() {
                info!("Credential missing, returning to sign-in");
            } else {
                debug!("Credential appeared in storage");
            }
            self.publish(current);
        }
        current
    }

    /// Where a navigation to `route` actually lands.
    pub fn resolve(&self, route: Route) -> Route {
        match (self.check(), route) {
            (SessionState::Unauthenticated, _) => Route::SignIn,
            (SessionState::Authenticated, Route::SignIn) => Route::Home,
            (SessionState::Authenticated, route) => route,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Poll storage every `period` so external invalidation reaches
    /// subscribers. Stops once nobody is subscribed.
    pub fn spawn_watcher(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if self.state_tx.receiver_count() == 0 {
                    debug!("No session subscribers left, stopping watcher");
                    break;
                }
                self.check();
            }
        })
    }

    fn publish(&self, state: SessionState) {
        self.state_tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;

    fn guard(store: &MemoryTokenStore) -> SessionGuard {
        let store: Arc<dyn TokenStore> = Arc::new(store.clone());
        let api = ApiClient::with_base_url(
            "http://127.0.0.1:9/api/",
            Duration::from_secs(1),
            store.clone(),
        )
        .expect("client should build");
        SessionGuard::new(store, api)
    }

    #[test]
    fn test_initial_state_comes_from_storage() {
        let empty = MemoryTokenStore::new();
        assert_eq!(guard(&empty).state(), SessionState::Unauthenticated);

        let stored = MemoryTokenStore::with_token("T0");
        let g = guard(&stored);
        assert_eq!(g.state(), SessionState::Authenticated);
        assert_eq!(*g.subscribe().borrow(), SessionState::Authenticated);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = MemoryTokenStore::with_token("T0");
        let g = guard(&store);
        g.logout();
        assert!(!g.is_authenticated());
        assert_eq!(store.load(), None);
        g.logout();
        assert!(!g.is_authenticated());
        assert_eq!(g.resolve(Route::Home), Route::SignIn);
    }

    #[test]
    fn test_external_clear_is_observed() {
        let store = MemoryTokenStore::with_token("T0");
        let g = guard(&store);
        let mut rx = g.subscribe();
        assert_eq!(g.resolve(Route::Users), Route::Users);

        store.clear();
        assert!(!g.is_authenticated());
        assert_eq!(g.resolve(Route::Users), Route::SignIn);
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow_and_update(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_signed_in_user_skips_sign_in() {
        let store = MemoryTokenStore::with_token("T0");
        let g = guard(&store);
        assert_eq!(g.resolve(Route::SignIn), Route::Home);
        assert_eq!(g.resolve(Route::Transactions), Route::Transactions);
    }

    #[tokio::test]
    async fn test_watcher_publishes_external_clear() {
        let store = MemoryTokenStore::with_token("T0");
        let g = Arc::new(guard(&store));
        let mut rx = g.subscribe();
        let handle = g.clone().spawn_watcher(Duration::from_millis(10));

        store.clear();
        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("watcher should notice within the timeout")
            .expect("sender alive");
        assert_eq!(*rx.borrow(), SessionState::Unauthenticated);

        drop(rx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("watcher should stop without subscribers")
            .expect("watcher task should not panic");
    }
}
