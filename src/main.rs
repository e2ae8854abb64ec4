//! Server entry-point: configuration, database, sessions, and the HTTP API.

use tracing_subscriber::{fmt, EnvFilter};

use tally::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let oauth = startup::build_oauth_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let session = startup::session_layer();

    let app = router::routes()
        .with_state(AppState { db, oauth })
        .layer(session);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(addr = %addr, "starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
