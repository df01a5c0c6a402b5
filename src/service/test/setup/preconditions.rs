use super::*;

/// Tests setup on a channel that is already configured.
///
/// Verifies the request is rejected before any Discord call or database write.
///
/// Expected: Err(AlreadyConfigured), no calls, no rows
#[tokio::test]
async fn rejects_configured_channel_before_side_effects() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();
    cache.set(key(), GuildChannelSetting::from_raw(0, 0)).await;

    let result = service(db, &channels, &cache).setup(without_manager()).await;

    assert!(matches!(result, Err(SetupError::AlreadyConfigured)));
    assert!(channels.calls().is_empty());
    assert_eq!(settings_rows(db).await, 0);
}

/// Tests setup on a channel with a full page of messages.
///
/// Verifies the request is rejected right after the fetch, before any permission
/// change.
///
/// Expected: Err(TooManyMessages), only the fetch call
#[tokio::test]
async fn rejects_full_message_page_before_permission_edits() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new().with_messages((1..=100).map(chat_message).collect());
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache)
        .setup(with_manager(MANAGER_ROLE, LOG_CHANNEL))
        .await;

    assert!(matches!(result, Err(SetupError::TooManyMessages)));
    assert_eq!(
        channels.calls(),
        vec![Call::Fetch {
            channel_id: ChannelId::new(CHANNEL),
            limit: 100,
        }]
    );
    assert!(!cache.has(key()).await);
}

/// Tests 99 messages, one below the limit.
///
/// Expected: Ok with 99 messages deleted
#[tokio::test]
async fn accepts_just_below_message_limit() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new().with_messages((1..=99).map(chat_message).collect());
    let cache = SettingsCache::new();

    let outcome = service(db, &channels, &cache)
        .setup(without_manager())
        .await
        .unwrap();

    assert_eq!(outcome.deleted_messages, 99);
}

/// Tests a message page that cannot be fetched.
///
/// Expected: Err(FetchMessagesFailed) with the generic code
#[tokio::test]
async fn reports_fetch_failure() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new().failing(Operation::Fetch);
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache).setup(without_manager()).await;

    let error = result.unwrap_err();
    assert!(matches!(error, SetupError::FetchMessagesFailed(_)));
    assert_eq!(
        error.into_notice(BOT_NAME).field_value("Error Code:"),
        Some("setupFetchMessagesFailed")
    );
}

/// Tests manager options where the log channel did not parse.
///
/// Verifies the error code embeds both parsed values and nothing is changed.
///
/// Expected: Err(InvalidManagerOptions) with code `setupLog0Mgr3000`
#[tokio::test]
async fn rejects_unparsed_manager_ids_with_code() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache)
        .setup(with_manager(MANAGER_ROLE, 0))
        .await;

    let error = result.unwrap_err();
    assert_eq!(
        error.into_notice(BOT_NAME).field_value("Error Code:"),
        Some("setupLog0Mgr3000")
    );
    assert_eq!(channels.calls().len(), 1);
    assert_eq!(settings_rows(db).await, 0);
}

/// Tests `with-manager-role` arriving without any options.
///
/// Expected: Err(MissingManagerOptions) with code `setupMissingRoleMgrOptions`
#[tokio::test]
async fn rejects_missing_manager_options() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache)
        .setup(SetupRequest {
            key: key(),
            variant: SetupVariant::WithManagerRole(None),
        })
        .await;

    let error = result.unwrap_err();
    assert_eq!(
        error.into_notice(BOT_NAME).field_value("Error Code:"),
        Some("setupMissingRoleMgrOptions")
    );
}

/// Tests a log channel the bot cannot post in.
///
/// Verifies the probe happens before any permission change.
///
/// Expected: Err(LogChannelUnreachable), no permission calls
#[tokio::test]
async fn rejects_unreachable_log_channel() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels =
        FakeChannels::new().failing(Operation::Send(ChannelId::new(LOG_CHANNEL)));
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache)
        .setup(with_manager(MANAGER_ROLE, LOG_CHANNEL))
        .await;

    assert!(matches!(result, Err(SetupError::LogChannelUnreachable(_))));
    assert!(!channels
        .calls()
        .iter()
        .any(|call| matches!(call, Call::Permission { .. })));
    assert_eq!(settings_rows(db).await, 0);
}

/// Tests running setup twice on the same channel.
///
/// Expected: second run rejected, exactly one row stored
#[tokio::test]
async fn replay_is_rejected_without_duplicate_row() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();

    service(db, &channels, &cache)
        .setup(without_manager())
        .await
        .unwrap();
    let replay = service(db, &channels, &cache).setup(without_manager()).await;

    assert!(matches!(replay, Err(SetupError::AlreadyConfigured)));
    assert_eq!(settings_rows(db).await, 1);
}

/// Tests two setups racing on the same channel.
///
/// Verifies the per-channel lock lets exactly one through.
///
/// Expected: one Ok, one AlreadyConfigured, one row
#[tokio::test]
async fn concurrent_setups_configure_once() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();

    let first = service(db, &channels, &cache);
    let second = service(db, &channels, &cache);
    let (a, b) = tokio::join!(first.setup(without_manager()), second.setup(without_manager()));

    let results = [a, b];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|result| matches!(result, Err(SetupError::AlreadyConfigured))));
    assert_eq!(settings_rows(db).await, 1);
}
