//! Server initialization and runtime setup.
//!
//! Builds the connection pool, cache and identity client, then runs the HTTP
//! and gRPC servers side by side until a shutdown signal arrives.

use crate::application::services::{AuthService, AuthorService};
use crate::config::Config;
use crate::domain::identity::TokenValidator;
use crate::domain::repositories::AuthorRepository;
use crate::grpc::AuthorAdapter;
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::identity::GrpcTokenValidator;
use crate::infrastructure::persistence::PgAuthorRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::watch;

/// Runs the HTTP and gRPC servers with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis list cache (or in-process fallback)
/// - Identity service client
/// - Axum HTTP server and Tonic gRPC server
///
/// Both servers drain in-flight requests on Ctrl+C or SIGTERM; the pool is
/// closed once both have stopped.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - `TOKEN_SERVICE_URL` is not a valid endpoint
/// - Either server fails to bind or stops with an error
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let cache = build_cache(&config).await;

    let validator: Arc<dyn TokenValidator> = Arc::new(
        GrpcTokenValidator::connect_lazy(&config.token_service_url)
            .context("Invalid TOKEN_SERVICE_URL")?,
    );

    let repository: Arc<dyn AuthorRepository> =
        Arc::new(PgAuthorRepository::new(Arc::new(pool.clone())));
    let author_service = Arc::new(AuthorService::new(repository, cache.clone()));
    let auth_service = Arc::new(AuthService::new(validator));

    let state = AppState::new(author_service.clone(), auth_service, cache);

    let http_addr: SocketAddr = config.listen_addr.parse()?;
    let grpc_addr: SocketAddr = config.grpc_listen_addr.parse()?;

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    tracing::info!("HTTP listening on http://{http_addr}");

    let http = async {
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service(app_router(state)),
        )
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx.clone()))
        .await
        .context("HTTP server error")
    };

    tracing::info!("gRPC listening on {grpc_addr}");
    let grpc = async {
        tonic::transport::Server::builder()
            .add_service(AuthorAdapter::new(author_service).into_server())
            .serve_with_shutdown(grpc_addr, wait_for_shutdown(shutdown_rx.clone()))
            .await
            .context("gRPC server error")
    };

    let result = tokio::try_join!(http, grpc);

    pool.close().await;
    tracing::info!("Servers stopped, database pool closed");

    result.map(|_| ())
}

/// Picks the list cache backend.
///
/// Redis when configured and reachable; otherwise an in-process LRU cache
/// with the same TTL.
async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let ttl = config.list_cache_ttl_seconds;
    let memory = || -> Arc<dyn CacheService> {
        Arc::new(MemoryCache::new(
            config.memory_cache_capacity,
            Duration::from_secs(ttl),
        ))
    };

    match &config.redis_url {
        Some(redis_url) => match RedisCache::connect(redis_url, ttl).await {
            Ok(redis) => {
                tracing::info!("List cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
                memory()
            }
        },
        None => {
            tracing::info!("List cache enabled (in-memory)");
            memory()
        }
    }
}

async fn wait_for_shutdown(mut rx: watch::Receiver<()>) {
    let _ = rx.changed().await;
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
