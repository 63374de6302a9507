//! Primix - mix colors from three user-chosen primaries
//!
//! HTTP service and CLI around [`primix_core`].
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
