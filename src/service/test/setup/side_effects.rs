use super::*;

/// Tests the full path without a manager role.
///
/// Verifies the order of Discord calls, the stored row, the cache entry, and the
/// welcome message contents.
///
/// Expected: Ok, `@everyone` denied, chat deleted, welcome sent and pinned
#[tokio::test]
async fn configures_channel_without_manager_role() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new().with_messages(vec![chat_message(1), chat_message(2)]);
    let cache = SettingsCache::new();

    let outcome = service(db, &channels, &cache)
        .setup(without_manager())
        .await
        .unwrap();

    assert_eq!(outcome.deleted_messages, 2);
    assert!(outcome.pinned);

    let calls = channels.calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(calls[0], Call::Fetch { .. }));
    assert_eq!(calls[1], permission(GUILD, false));
    assert_eq!(
        calls[2],
        Call::Delete {
            channel_id: ChannelId::new(CHANNEL),
            message_ids: vec![MessageId::new(1), MessageId::new(2)],
            reason: CLEANUP_REASON.to_string(),
        }
    );
    assert!(matches!(calls[3], Call::Send { .. }));
    assert!(matches!(calls[4], Call::Pin { .. }));

    let welcome = &channels.sent_to(ChannelId::new(CHANNEL))[0];
    assert_eq!(welcome["content"], "Welcome to <#2000>, managed by <@42>!");
    assert_eq!(
        welcome["components"][0]["components"][0]["custom_id"],
        "gameSel"
    );

    let setting = cache.get(key()).await.unwrap();
    assert!(!setting.managed);
    assert_eq!(settings_rows(db).await, 1);
}

/// Tests the full path with a manager role.
///
/// Verifies the probe, the manager grant, and the `@everyone` deny happen in
/// that order, and the stored setting carries both ids.
///
/// Expected: Ok with managed cache entry
#[tokio::test]
async fn grants_manager_before_denying_everyone() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();

    service(db, &channels, &cache)
        .setup(with_manager(MANAGER_ROLE, LOG_CHANNEL))
        .await
        .unwrap();

    let calls = channels.calls();
    assert!(matches!(
        calls[1],
        Call::Send { channel_id, .. } if channel_id == ChannelId::new(LOG_CHANNEL)
    ));
    assert_eq!(calls[2], permission(MANAGER_ROLE, true));
    assert_eq!(calls[3], permission(GUILD, false));

    let setting = cache.get(key()).await.unwrap();
    assert!(setting.managed);
    assert_eq!(setting.manager_role_id, Some(RoleId::new(MANAGER_ROLE)));
    assert_eq!(setting.log_channel_id, Some(ChannelId::new(LOG_CHANNEL)));
}

/// Tests a failed manager grant.
///
/// Verifies the `@everyone` deny is skipped and nothing is persisted.
///
/// Expected: Err(PermissionsFailed), no deny call, no row, no cache entry
#[tokio::test]
async fn grant_failure_skips_deny_and_persistence() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels =
        FakeChannels::new().failing(Operation::Permission(RoleId::new(MANAGER_ROLE)));
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache)
        .setup(with_manager(MANAGER_ROLE, LOG_CHANNEL))
        .await;

    assert!(matches!(result, Err(SetupError::PermissionsFailed(_))));
    assert!(!channels.calls().contains(&permission(GUILD, false)));
    assert_eq!(settings_rows(db).await, 0);
    assert!(!cache.has(key()).await);
}

/// Tests a failed `@everyone` deny.
///
/// Expected: Err(PermissionsFailed), nothing deleted or persisted
#[tokio::test]
async fn deny_failure_aborts_before_cleanup() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new()
        .with_messages(vec![chat_message(1)])
        .failing(Operation::Permission(RoleId::new(GUILD)));
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache).setup(without_manager()).await;

    assert!(matches!(result, Err(SetupError::PermissionsFailed(_))));
    assert!(!channels
        .calls()
        .iter()
        .any(|call| matches!(call, Call::Delete { .. })));
    assert_eq!(settings_rows(db).await, 0);
}

/// Tests that earlier event posts survive cleanup.
///
/// Verifies only messages without the `Created by:` footer from the bot are
/// deleted, including a look-alike from another user.
///
/// Expected: event posts preserved, everything else deleted
#[tokio::test]
async fn preserves_existing_event_posts() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let impostor = ChannelMessage {
        id: MessageId::new(4),
        author_id: UserId::new(7),
        footer: Some("Created by: someone | 7".to_string()),
    };
    let channels = FakeChannels::new().with_messages(vec![
        event_post(1),
        chat_message(2),
        event_post(3),
        impostor,
    ]);
    let cache = SettingsCache::new();

    let outcome = service(db, &channels, &cache)
        .setup(without_manager())
        .await
        .unwrap();

    assert_eq!(outcome.preserved_posts, 2);
    let deleted = channels.calls().into_iter().find_map(|call| match call {
        Call::Delete { message_ids, .. } => Some(message_ids),
        _ => None,
    });
    assert_eq!(deleted, Some(vec![MessageId::new(2), MessageId::new(4)]));
}

/// Tests a channel with nothing to delete.
///
/// Expected: no delete call
#[tokio::test]
async fn skips_delete_when_only_event_posts() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new().with_messages(vec![event_post(1)]);
    let cache = SettingsCache::new();

    service(db, &channels, &cache)
        .setup(without_manager())
        .await
        .unwrap();

    assert!(!channels
        .calls()
        .iter()
        .any(|call| matches!(call, Call::Delete { .. })));
}

/// Tests that failed cleanup and pinning do not fail setup.
///
/// Expected: Ok with `pinned` false, row and cache entry present
#[tokio::test]
async fn tolerates_cleanup_and_pin_failures() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new()
        .with_messages(vec![chat_message(1)])
        .failing(Operation::Delete)
        .failing(Operation::Pin);
    let cache = SettingsCache::new();

    let outcome = service(db, &channels, &cache)
        .setup(without_manager())
        .await
        .unwrap();

    assert!(!outcome.pinned);
    assert!(cache.has(key()).await);
    assert_eq!(settings_rows(db).await, 1);
}

/// Tests a database that rejects the insert.
///
/// Verifies the cache is only written after the row is committed.
///
/// Expected: Err(PersistFailed) with `setupDBInsertFailed`, no cache entry, no welcome
#[tokio::test]
async fn persist_failure_leaves_cache_untouched() {
    // No tables, so the insert fails
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new();
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache).setup(without_manager()).await;

    let error = result.unwrap_err();
    assert!(matches!(error, SetupError::PersistFailed(_)));
    assert_eq!(
        error.into_notice(BOT_NAME).field_value("Error Code:"),
        Some("setupDBInsertFailed")
    );
    assert!(!cache.has(key()).await);
    assert!(channels.sent_to(ChannelId::new(CHANNEL)).is_empty());
}

/// Tests a welcome message that cannot be sent.
///
/// Verifies the channel stays configured even though it was not announced.
///
/// Expected: Err(AnnounceFailed), row and cache entry present
#[tokio::test]
async fn announce_failure_keeps_configuration() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let channels = FakeChannels::new().failing(Operation::Send(ChannelId::new(CHANNEL)));
    let cache = SettingsCache::new();

    let result = service(db, &channels, &cache).setup(without_manager()).await;

    assert!(matches!(result, Err(SetupError::AnnounceFailed(_))));
    assert!(cache.has(key()).await);
    assert_eq!(settings_rows(db).await, 1);
    assert!(!channels
        .calls()
        .iter()
        .any(|call| matches!(call, Call::Pin { .. })));
}
