//! # Domain Layer
//!
//! The domain layer contains the core business records of the warehouse
//! service. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! ## Structure
//!
//! - **entities**: Domain entities, their partial-update patches, and
//!   repository traits
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - A missing primary record is `AppError::NotFound`; a missing detail
//!   record is `Ok(None)`

pub mod entities;

// Re-export commonly used types
pub use entities::*;
