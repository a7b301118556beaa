use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use savepass::metrics::{track_requests, Metrics};
use savepass::{routes, store, AppState, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::load().context("failed to load configuration")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!(host = %config.host, port = config.port, "starting savepass");

    let pool = store::connect(&config)
        .await
        .context("failed to connect to database")?;
    store::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    info!("database ready");

    let metrics = Metrics::new().context("failed to register metrics")?;
    metrics.spawn_sampler(Duration::from_secs(config.metrics_interval_secs));

    let state = web::Data::new(AppState::postgres(pool, &config));
    let metrics = web::Data::new(metrics);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(from_fn(track_requests))
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(metrics.clone())
            .configure(routes::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
