//! REST API client module for the club platform backend.
//!
//! This module provides the `ApiClient` gateway that every screen talks
//! through, the resource calls built on it, and the `Freshness` guard used
//! to drop superseded responses.
//!
//! The backend uses bearer token authentication obtained from the
//! `auth/login` endpoint.

pub mod client;
pub mod error;
pub mod freshness;
pub mod resources;

pub use client::ApiClient;
pub use error::{ApiError, NETWORK_ERROR_MESSAGE};
pub use freshness::{Freshness, Ticket};
