//! CLI utilities for Foodshare order tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Text and JSON rendering helpers

#![warn(missing_docs)]

pub mod output;
