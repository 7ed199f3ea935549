use actix_web::web::Data;
use actix_web::{App, HttpServer};
use rusty_golf_picks::args;
use rusty_golf_picks::controller::http_handlers;
use rusty_golf_picks::registry::SqliteBetRegistry;
use rusty_golf_picks::source::PgaTourClient;
use rusty_golf_picks::{PicksService, UpcomingPlayersCache};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rusty_golf_picks=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = args::args_checks()?;

    let client = Arc::new(PgaTourClient::new(
        config.leaderboard_url.clone(),
        config.tournament_url.clone(),
        config.fetch_timeout,
    )?);
    let registry = Arc::new(SqliteBetRegistry::open(&config.db_name)?);
    let upcoming = Arc::new(UpcomingPlayersCache::new(client.clone(), config.cache_ttl));
    let service = PicksService::new(client, registry, upcoming);

    info!(
        bind = %config.bind,
        db = %config.db_name,
        ttl_minutes = config.cache_ttl.num_minutes(),
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(service.clone()))
            .configure(http_handlers::configure)
    })
    .bind(config.bind)?
    .run()
    .await?;
    Ok(())
}
