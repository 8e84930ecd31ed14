//! Data Transfer Objects
//!
//! DTOs for API request/response serialization, with the mappings between
//! them and the domain entities.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
