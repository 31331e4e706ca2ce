//! Configuration module for storyrake
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the built-in defaults used when no file is given.
//!
//! # Example
//!
//! ```no_run
//! use storyrake::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("storyrake.toml")).unwrap();
//! println!(
//!     "Pages {}..={} with {} workers",
//!     config.scraper.first_page, config.scraper.last_page, config.scraper.workers
//! );
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ScraperConfig, SourceConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
