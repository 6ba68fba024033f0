//! Buscador - product catalog search service
//!
//! A backend facade over a managed full-text search index:
//! - Filtered, sorted, paginated product search
//! - Autocomplete and document suggestions via a provider-side suggester
//! - Relational audit log of past searches

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod search;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
