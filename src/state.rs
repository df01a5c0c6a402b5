//! Application state shared across all interaction handlers.
//!
//! The state is built once during startup and handed to the bot's event handler.
//! Every field is cheap to clone: `DatabaseConnection` is a pool, `SettingsCache` and
//! the router sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::MessageId;

use crate::{
    bot::router::ComponentRouter,
    service::{keyed_lock::KeyedLocks, settings_cache::SettingsCache},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the settings and usage tables.
    pub db: DatabaseConnection,

    /// Configured LFG channels, mirrored from the settings table.
    pub settings: SettingsCache,

    /// Serializes roster clicks on the same event post.
    pub roster_locks: KeyedLocks<MessageId>,

    /// Custom ID prefix to component route lookup.
    pub router: Arc<ComponentRouter>,

    /// Name the bot uses for itself in replies.
    pub bot_name: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        settings: SettingsCache,
        router: ComponentRouter,
        bot_name: String,
    ) -> Self {
        Self {
            db,
            settings,
            roster_locks: KeyedLocks::new(),
            router: Arc::new(router),
            bot_name,
        }
    }
}
