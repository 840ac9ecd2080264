//! NodeX service library crate.
//!
//! # Purpose
//! Exposes the HTTP API surface, membership service, configuration, and
//! storage implementations for use by the binary and tests.
//!
//! # Notes
//! Module boundaries mirror the HTTP API and the document-store seam.
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod i18n;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
