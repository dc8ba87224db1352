use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{cors, trace};
use tracing_subscriber::prelude::*;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();
}

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .merge(modules::get_router())
        .with_state(ctx)
        .layer(
            ServiceBuilder::new()
                .layer(trace::TraceLayer::new_for_http())
                .layer(
                    cors::CorsLayer::new()
                        .allow_methods([
                            Method::OPTIONS,
                            Method::GET,
                            Method::POST,
                            Method::PATCH,
                        ])
                        .allow_headers([header::CONTENT_TYPE])
                        .allow_origin(cors::Any),
                )
                .layer(DefaultBodyLimit::max(1024 * 1024)),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());
        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        self.ctx.db.close().await;
        tracing::info!("Database connection closed");

        served
    }
}
