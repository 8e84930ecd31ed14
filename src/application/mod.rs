//! Application Layer
//!
//! Catalogue and warehouse services plus the request/response DTOs that
//! cross the HTTP boundary. Services talk to storage only through the
//! repository traits in `domain`.

pub mod dto;
pub mod services;
