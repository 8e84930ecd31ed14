//! # Warehouse Service Library
//!
//! A catalogue and warehouse administration backend with:
//! - RESTful HTTP API endpoints under `/api/v1`
//! - PostgreSQL or in-memory storage behind repository traits
//! - Merge-patch updates for every resource
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, patches and repository traits
//! - **Application Layer**: Catalogue and warehouse services, DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! warehouse_service/
//! +-- config/         Configuration management
//! +-- domain/         Entities, patches, repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, in-memory storage, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors, validation, blob encoding
//! ```

pub mod config;

pub mod domain;

pub mod application;

pub mod infrastructure;

pub mod presentation;

pub mod shared;

pub mod startup;

pub mod telemetry;
