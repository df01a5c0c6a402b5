mod bot;
mod config;
mod data;
mod discord;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{
    bot::{router::ComponentRouter, start::start_bot},
    config::Config,
    error::AppError,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let settings = startup::load_settings_cache(&db).await?;
    let router = ComponentRouter::new()?;

    tracing::info!("Starting {} with {} interaction routes", config.bot_name, router.len());

    let state = AppState::new(db, settings, router, config.bot_name.clone());

    start_bot(&config, state).await
}
