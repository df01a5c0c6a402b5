use super::*;

/// Tests deleting a configured channel.
///
/// Verifies that only the targeted row is removed.
///
/// Expected: Ok(true) and one remaining row
#[tokio::test]
async fn deletes_configured_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id(1)
        .channel_id(2)
        .build()
        .await?;
    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id(1)
        .channel_id(3)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let deleted = repo
        .delete(SettingKey::new(GuildId::new(1), ChannelId::new(2)))
        .await?;

    assert!(deleted);
    let remaining = entity::prelude::GuildSettings::find().count(db).await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests deleting a channel that was never configured.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let deleted = repo
        .delete(SettingKey::new(GuildId::new(1), ChannelId::new(2)))
        .await?;

    assert!(!deleted);

    Ok(())
}
