//! Authentication module for the admin session.
//!
//! This module provides:
//! - `SessionGuard`: login/logout and the authenticated flag, derived from
//!   storage on every read
//! - `TokenStore`: durable credential storage (file, OS keychain, memory)
//! - `Route`: the navigation surface the guard gates
//!
//! The credential is an opaque bearer token stored under a single key.

pub mod credentials;
pub mod route;
pub mod session;
pub mod store;

pub use credentials::KeyringTokenStore;
pub use route::Route;
pub use session::{SessionGuard, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
