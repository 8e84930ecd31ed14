//! Infrastructure Layer
//!
//! Contains implementations of the domain repository traits:
//! - Database access (PostgreSQL pool, migrations, merge-patch queries)
//! - In-memory repositories for tests and database-less runs
//! - Prometheus metrics

pub mod database;
pub mod memory;
pub mod metrics;
pub mod repositories;

pub use repositories::Repositories;
