//! foxcount: fox counter service binary entrypoint.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foxcount::config::Config;
use foxcount::counter::FoxCounter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    // The one piece of shared state, cloned into both servers
    let counter = FoxCounter::new(&config.metric_name).expect("Invalid metric name");

    // Metrics server: path-agnostic exposition on its own port
    let metrics_addr: SocketAddr = format!("{}:{}", config.http_address, config.metrics_port)
        .parse()
        .expect("Invalid metrics address");
    let metrics_app = foxcount::build_metrics_app(counter.clone());
    let metrics_listener = tokio::net::TcpListener::bind(metrics_addr).await.unwrap();
    tracing::info!("Serving metric {} on {}", config.metric_name, metrics_addr);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(metrics_listener, metrics_app).await {
            tracing::error!(error = %e, "Metrics server failed");
        }
    });

    // Application server
    let addr: SocketAddr = format!("{}:{}", config.http_address, config.http_port)
        .parse()
        .expect("Invalid bind address");
    tracing::info!("Starting fox counter server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let app = foxcount::build_app(counter);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
