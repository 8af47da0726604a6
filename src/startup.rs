//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::infrastructure::database;
use crate::presentation::http::handlers;
use crate::presentation::http::routes;
use crate::presentation::middleware::cors;
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub snowflake: Arc<SnowflakeGenerator>,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        // Apply pending migrations
        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        // Create snowflake generator for course ID assignment
        let snowflake = Arc::new(SnowflakeGenerator::new(settings.snowflake.machine_id as u64));

        handlers::health::init_server_start();

        // Create app state
        let settings = Arc::new(settings);
        let state = AppState {
            db,
            snowflake,
            settings: settings.clone(),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr = settings.server.socket_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
