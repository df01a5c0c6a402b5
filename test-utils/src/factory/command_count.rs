//! Usage counter factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a usage counter row with the given name and count.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Counter name (e.g. `cmd-setup`)
/// - `count` - Starting count
///
/// # Returns
/// - `Ok(entity::command_count::Model)` - Created counter row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_command_count(
    db: &DatabaseConnection,
    name: &str,
    count: i64,
) -> Result<entity::command_count::Model, DbErr> {
    entity::command_count::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
        count: ActiveValue::Set(count),
    }
    .insert(db)
    .await
}
