//! Bulletin entry-point: configuration, tracing, database, HTTP server.

use actix_web::cookie::Key;
use actix_web::{HttpServer, web};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use bulletin::inbound::http::health::HealthState;
use bulletin::outbound::persistence::{build_pool, run_migrations};
use bulletin::server::{AppConfig, build_app, build_state, session_middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let config = AppConfig::parse();

    let key = match &config.session_key_file {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => Key::derive_from(&bytes),
            Err(error) => {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {}: {error}",
                    path.display()
                )));
            }
        },
        None => {
            warn!("no session key file configured; using an ephemeral key");
            Key::generate()
        }
    };

    let pool = build_pool(&config.database_url).map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    let state = web::Data::new(build_state(&pool, config.news_count_on_home_page));
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let cookie_secure = config.cookie_secure;

    let server = HttpServer::new(move || {
        build_app(
            state.clone(),
            server_health_state.clone(),
            session_middleware(key.clone(), cookie_secure),
        )
    })
    .bind(config.bind)?;

    health_state.mark_ready();
    server.run().await
}
