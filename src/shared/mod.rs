//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod blob;
pub mod error;
pub mod validation;
