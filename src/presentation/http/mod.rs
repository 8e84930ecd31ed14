//! HTTP API
//!
//! Routes, handlers and request extractors for the REST API.

pub mod extractors;
pub mod handlers;
pub mod routes;
