#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::{net::SocketAddr, sync::Arc};

use pokeatlas_web::{
    app,
    backend::HttpPokemonClient,
    config::Config,
    http::cors_layer,
    pokedex::PokedexLoader,
    service_info::ServiceInfo,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load and validate configuration first (fail-fast)
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "pokeatlas-web starting up"
    );

    // One address for the lifetime of the process, shared by every loader
    let (address, source) = config.backend.api_address()?;
    let info = ServiceInfo::new(&address, source, config.backend.timeout());
    tracing::info!(
        git_sha = info.git_sha.as_deref().unwrap_or("unknown"),
        built_at = info.built_at.as_deref().unwrap_or("unknown"),
        address = %address,
        source = %source,
        timeout_ms = info.backend.timeout_ms,
        "resolved backend address"
    );

    let client = HttpPokemonClient::new(&address, config.backend.timeout())?;
    let loader = Arc::new(PokedexLoader::new(Arc::new(client)));

    if config.swagger.enabled {
        tracing::info!("Swagger UI enabled at /swagger-ui");
    }

    let app = app::router(loader, info, config.swagger.enabled)
        .layer(cors_layer(&config.cors.allowed_origins))
        .layer(TraceLayer::new_for_http());

    let ip: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(ip, config.server.port);
    tracing::info!("Starting server at http://{}/pokedex", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
