//! Database access layer for inventur-server
//!
//! Schema creation lives in `inventur_common::db`; this module holds the
//! record queries used by the request handlers.

pub mod immediate;
pub mod records;

pub use immediate::ImmediateTransaction;
pub use inventur_common::db::init_database;
