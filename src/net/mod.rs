//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` resolves endpoint URLs and performs calls, and `types` defines the
//! wire schema.

pub mod api;
pub mod types;
