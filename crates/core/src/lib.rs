//! Bookmarks core types and utilities

pub mod config;
pub mod environment;
pub mod error;
pub mod identity;
pub mod logging;
pub mod types;

pub use config::{FrontendConfig, LoggingConfig};
pub use environment::{ApiHost, Environment};
pub use error::CoreError;
pub use identity::{Identity, TokenClaims};
pub use types::{AutocompleteItem, CreateCategoryEvent};
