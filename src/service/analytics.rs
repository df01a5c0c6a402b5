//! Usage counters for commands and buttons.

use sea_orm::DatabaseConnection;

use crate::data::command_count::CommandCountRepository;

/// Counter name for a slash command, e.g. `cmd-setup`.
pub fn command_counter(name: &str) -> String {
    format!("cmd-{name}")
}

/// Counter name for a component route, e.g. `btn-gameSel`.
pub fn button_counter(route_id: &str) -> String {
    format!("btn-{route_id}")
}

/// Increments a usage counter in the background so the interaction reply never
/// waits on it. Failures are logged and never reach the user.
pub fn record_usage(db: &DatabaseConnection, name: String) {
    let db = db.clone();

    tokio::spawn(async move {
        if let Err(e) = CommandCountRepository::new(&db).increment(&name).await {
            tracing::error!("Failed to increment usage counter {}: {}", name, e);
        }
    });
}
