//! Authentication for privileged endpoints.
pub mod admin;
