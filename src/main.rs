use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use climate_oracle::{routes, AppState};
use oracle_core::OracleConfig;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AI Climate Oracle subnet demo server.
#[derive(Parser, Debug)]
#[command(name = "climate-oracle", version, about)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Directory of static assets for the landing page
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "climate_oracle=info,oracle_subnet=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = OracleConfig::load_or_default(&args.config);
    let state = Arc::new(AppState::new(config));

    let mut app = routes::router(state).layer(CorsLayer::permissive());
    if args.static_dir.is_dir() {
        let index = args.static_dir.join("index.html");
        app = app
            .nest_service("/static", ServeDir::new(&args.static_dir))
            .route_service("/", ServeFile::new(index));
    } else {
        tracing::warn!(
            dir = %args.static_dir.display(),
            "Static asset directory not found, landing page disabled"
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Climate Oracle subnet demo listening on {}", addr);
    tracing::info!("    Demo scenarios: http://{}/api/demo-scenarios", addr);
    tracing::info!("    Network status: http://{}/network/status", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
