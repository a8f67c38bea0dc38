//! Customer Gateway
//!
//! An HTTP front door for the customer registration API: a single JSON
//! endpoint dispatched from an immutable route table, behind a configurable
//! CORS policy.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;

pub use error::{AppError, Result};

use std::time::Instant;

/// Application context shared across all handlers.
///
/// Built once by the entry point and handed to the router; there is no
/// ambient global state.
pub struct AppState {
    pub settings: config::Settings,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        Self {
            settings,
            started_at: Instant::now(),
        }
    }
}
