//! Quire - a minimal flat-file wiki server
//!
//! Pages are plain text files named after their titles, stored in a single
//! data directory. This crate serves them over HTTP for viewing and editing
//! through three HTML templates, with a home screen listing every known page.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod templates;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use handlers::router;
pub use services::PageStore;
pub use templates::TemplateSet;
pub use types::{AppState, Page};

// Re-export utility functions
pub use utils::{escape_attr, escape_html, validate_title};
