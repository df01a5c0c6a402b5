//! Usage counter repository.

use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::error::AppError;

/// Repository for the per-command usage counters.
pub struct CommandCountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandCountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Increments the counter for `name`, creating it at 1 if missing.
    ///
    /// # Returns
    /// - `Ok(())` - Counter incremented
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn increment(&self, name: &str) -> Result<(), AppError> {
        entity::prelude::CommandCount::insert(entity::command_count::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            count: ActiveValue::Set(1),
        })
        .on_conflict(
            OnConflict::column(entity::command_count::Column::Name)
                .value(
                    entity::command_count::Column::Count,
                    Expr::col(entity::command_count::Column::Count).add(1),
                )
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the current count for `name`, `0` if it was never incremented.
    pub async fn get(&self, name: &str) -> Result<i64, AppError> {
        let entity = entity::prelude::CommandCount::find()
            .filter(entity::command_count::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(|counter| counter.count).unwrap_or(0))
    }
}
