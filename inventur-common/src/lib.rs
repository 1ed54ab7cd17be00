//! # Inventur Common Library
//!
//! Shared code for the inventory intake service:
//! - Database initialization and the inventory record model
//! - Admin credential checks (HTTP Basic, constant-time)
//! - Configuration resolution
//! - Timestamp formatting

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
