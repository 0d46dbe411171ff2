//! # Gigboard Common Library
//!
//! Shared code for the Gigboard booking directory:
//! - Database models, initialization, and migrations
//! - Configuration loading and data folder resolution
//! - Error types
//! - Start-time parsing and formatting

pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
