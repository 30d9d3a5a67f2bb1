//! Configuration loading and schema definitions
//!
//! TOML configuration for the record store, search defaults and logging.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
