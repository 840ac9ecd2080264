//! NodeX HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and shared payload types.
pub mod admin;
pub mod error;
pub mod events;
pub mod openapi;
pub mod reviews;
pub mod stats;
pub mod system;
pub mod types;
pub mod users;
