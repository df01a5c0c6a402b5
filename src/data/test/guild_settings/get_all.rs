use super::*;

/// Tests loading every settings row.
///
/// Expected: Ok with all rows
#[tokio::test]
async fn returns_all_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::create_guild_settings(db).await?;
    factory::guild_settings::create_guild_settings(db).await?;
    factory::guild_settings::GuildSettingsFactory::new(db)
        .manager_role_id(7)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let all = repo.get_all().await?;

    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().filter(|settings| settings.setting.managed).count(), 1);

    Ok(())
}

/// Tests loading from an empty table.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a corrupt snowflake surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupt_snowflake() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    entity::guild_settings::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set("not-a-number".to_string()),
        channel_id: ActiveValue::Set("2".to_string()),
        manager_role_id: ActiveValue::Set("0".to_string()),
        log_channel_id: ActiveValue::Set("0".to_string()),
        created_at: ActiveValue::Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    let repo = GuildSettingsRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
