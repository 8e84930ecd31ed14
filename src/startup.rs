//! Application Startup
//!
//! Application building and server initialization.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::application::services::{CatalogueService, WarehouseService};
use crate::config::{Settings, StorageBackend};
use crate::infrastructure::{database, Repositories};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<CatalogueService>,
    pub warehouse: Arc<WarehouseService>,
    /// Present only for the postgres backend; used by readiness checks.
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(repositories: &Repositories, db: Option<PgPool>, settings: Settings) -> Self {
        Self {
            catalogue: Arc::new(CatalogueService::new(repositories)),
            warehouse: Arc::new(WarehouseService::new(repositories)),
            db,
            settings: Arc::new(settings),
        }
    }
}

/// Router with every route and middleware layer applied.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(axum::middleware::from_fn(logging::track_metrics))
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    shutdown_timeout: Duration,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let (repositories, db) = match settings.storage.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool)
                        .await
                        .context("failed to run migrations")?;
                    tracing::info!("Database migrations applied");
                }

                (Repositories::postgres(pool.clone()), Some(pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                (Repositories::memory(), None)
            }
        };

        let addr = settings.server_addr();
        let shutdown_timeout = Duration::from_secs(settings.server.shutdown_timeout_secs);

        let state = AppState::new(&repositories, db, settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            shutdown_timeout,
        })
    }

    /// Run the server until a shutdown signal arrives.
    ///
    /// In-flight requests get `server.shutdown_timeout_secs` to finish.
    pub async fn run_until_stopped(self) -> Result<()> {
        let Self {
            listener,
            router,
            shutdown_timeout,
        } = self;

        let signalled = Arc::new(Notify::new());
        let notify = signalled.clone();

        let server = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                notify.notify_one();
            })
            .into_future();

        let deadline = async {
            signalled.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        };

        tokio::select! {
            result = server => result?,
            _ = deadline => {
                tracing::warn!(
                    timeout_secs = shutdown_timeout.as_secs(),
                    "Shutdown timeout elapsed, dropping in-flight requests"
                );
            }
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
