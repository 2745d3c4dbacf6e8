//! Core library for clubadmin.
//!
//! Holds everything the admin front ends share: the session guard that
//! owns the credential, the HTTP gateway every request leaves through, the
//! notification boundary, resource models and the `AdminApp` facade.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod models;
pub mod notify;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use app::AdminApp;
pub use auth::{Route, SessionGuard, SessionState, TokenStore};
pub use config::Config;
pub use notify::{Notice, Notifier, Reporter};
