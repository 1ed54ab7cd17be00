//! API helpers shared between library and server
//!
//! Contains the framework-independent part of the admin access gate.

pub mod auth;

pub use auth::{
    constant_time_eq, parse_basic_authorization, AdminCredentials, ApiAuthError,
    BasicCredentials,
};
