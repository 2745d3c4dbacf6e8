#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use clubadmin_core::auth::MemoryTokenStore;
use clubadmin_core::notify::RecordingNotifier;
use clubadmin_core::{AdminApp, ApiClient, Config, SessionGuard, TokenStore};

/// An address nothing listens on, for connection failures
pub const UNREACHABLE_BASE: &str = "http://127.0.0.1:9/api/";

pub fn base_url(server: &mockito::ServerGuard) -> String {
    format!("{}/api/", server.url())
}

pub fn client(base: &str, store: &MemoryTokenStore) -> ApiClient {
    ApiClient::with_base_url(base, Duration::from_secs(5), Arc::new(store.clone()))
        .expect("failed to build client")
}

pub fn guard(base: &str, store: &MemoryTokenStore) -> SessionGuard {
    let shared: Arc<dyn TokenStore> = Arc::new(store.clone());
    SessionGuard::new(shared, client(base, store))
}

pub fn app(base: &str, store: &MemoryTokenStore) -> (AdminApp, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let config = Config {
        base_url: base.to_string(),
        request_timeout_secs: 5,
        ..Config::default()
    };
    let app = AdminApp::new(config, Arc::new(store.clone()), Arc::new(recorder.clone()))
        .expect("failed to build app");
    (app, recorder)
}
