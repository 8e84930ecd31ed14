//! # Configuration
//!
//! Settings are layered, later sources winning:
//! 1. built-in defaults (port 8080, postgres storage, any CORS origin)
//! 2. `config/default.toml`, then `config/{RUN_ENV}.toml`
//! 3. `APP__SECTION__KEY` environment variables
//! 4. `SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL`, `STORAGE_BACKEND`
//!
//! A `.env` file is read first when present.
//!
//! ```rust,ignore
//! use warehouse_service::config::{Settings, StorageBackend};
//!
//! let settings = Settings::load()?;
//! if settings.storage.backend == StorageBackend::Memory {
//!     tracing::warn!("Data will not survive a restart");
//! }
//! ```

mod settings;

pub use settings::*;
