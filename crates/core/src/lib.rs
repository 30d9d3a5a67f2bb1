//! Core utilities for Foodshare order services
//!
//! Shared functionality used by the search, order and CLI crates:
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//! - **Validation**: argument checks performed before any storage access
//!
//! # Example
//!
//! ```rust,no_run
//! use foodshare_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("store: {}", config.schema.store.path.display());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};
