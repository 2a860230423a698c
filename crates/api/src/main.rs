use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridwatch_api::config::ServerConfig;
use gridwatch_api::pipeline::IngestService;
use gridwatch_api::router::build_app_router;
use gridwatch_api::state::AppState;
use gridwatch_api::background;
use gridwatch_events::{AlertFanout, EmailConfig, EmailSink, NotificationSink, WebhookSink};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridwatch_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = gridwatch_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    gridwatch_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    gridwatch_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Notification sinks ---
    let mut sinks: Vec<Arc<dyn NotificationSink>> = Vec::new();

    match EmailConfig::from_env() {
        Some(email_config) => {
            tracing::info!(host = %email_config.smtp_host, "Email sink configured");
            sinks.push(Arc::new(EmailSink::new(email_config)));
        }
        None => {
            tracing::info!("SMTP_HOST not set, email delivery disabled");
        }
    }

    match WebhookSink::from_env() {
        Some(Ok(webhook)) => {
            tracing::info!("Webhook sink configured");
            sinks.push(Arc::new(webhook));
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, "Webhook sink misconfigured, disabling");
        }
        None => {
            tracing::info!("ALERT_WEBHOOK_URL not set, webhook delivery disabled");
        }
    }

    let fanout = Arc::new(AlertFanout::new(pool.clone(), sinks));
    tracing::info!(sinks = fanout.sink_count(), "Alert fan-out ready");

    // --- Ingestion pipeline ---
    let pipeline = Arc::new(IngestService::new(pool.clone(), Arc::clone(&fanout)));

    // --- Background services ---
    let generation_cancel = CancellationToken::new();
    let generation_handle = if config.generation_enabled {
        Some(tokio::spawn(background::generation::run(
            Arc::clone(&pipeline),
            config.generation_interval_secs,
            generation_cancel.clone(),
        )))
    } else {
        tracing::info!("Generation scheduler disabled");
        None
    };

    let retention_cancel = CancellationToken::new();
    let retention_handle = tokio::spawn(background::reading_retention::run(
        pool.clone(),
        retention_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pipeline,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    generation_cancel.cancel();
    if let Some(handle) = generation_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
    }
    tracing::info!("Generation scheduler stopped");

    retention_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), retention_handle).await;
    tracing::info!("Reading retention job stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
