use super::*;

/// Tests creating settings for an unmanaged channel.
///
/// Verifies that the repository stores the guild and channel ids and that a
/// manager role / log channel of `0` comes back as absent.
///
/// Expected: Ok with unmanaged setting
#[tokio::test]
async fn creates_unmanaged_channel_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let key = SettingKey::new(GuildId::new(1), ChannelId::new(2));
    let repo = GuildSettingsRepository::new(db);
    let created = repo
        .create(CreateGuildSettingsParam {
            key,
            manager_role_id: 0,
            log_channel_id: 0,
        })
        .await?;

    assert_eq!(created.key, key);
    assert!(!created.setting.managed);
    assert!(created.setting.manager_role_id.is_none());
    assert!(created.setting.log_channel_id.is_none());

    Ok(())
}

/// Tests creating settings for a managed channel.
///
/// Verifies that manager role and log channel ids are persisted and parsed back
/// into typed snowflakes.
///
/// Expected: Ok with managed setting
#[tokio::test]
async fn creates_managed_channel_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let created = repo
        .create(CreateGuildSettingsParam {
            key: SettingKey::new(GuildId::new(1), ChannelId::new(2)),
            manager_role_id: 30,
            log_channel_id: 40,
        })
        .await?;

    assert!(created.setting.managed);
    assert_eq!(created.setting.manager_role_id, Some(RoleId::new(30)));
    assert_eq!(created.setting.log_channel_id, Some(ChannelId::new(40)));

    Ok(())
}

/// Tests that the same channel cannot be configured twice.
///
/// Verifies that the unique `(guild_id, channel_id)` index rejects a second
/// insert and leaves exactly one row behind.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id(1)
        .channel_id(2)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let result = repo
        .create(CreateGuildSettingsParam {
            key: SettingKey::new(GuildId::new(1), ChannelId::new(2)),
            manager_role_id: 0,
            log_channel_id: 0,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let count = entity::prelude::GuildSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same channel id may be configured in another guild.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_channel_id_in_different_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    for guild_id in [1, 2] {
        repo.create(CreateGuildSettingsParam {
            key: SettingKey::new(GuildId::new(guild_id), ChannelId::new(5)),
            manager_role_id: 0,
            log_channel_id: 0,
        })
        .await?;
    }

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
