use super::*;

/// Tests incrementing a counter that does not exist yet.
///
/// Expected: counter created with a value of 1
#[tokio::test]
async fn creates_missing_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandCountRepository::new(db);
    repo.increment("cmd-setup").await?;

    assert_eq!(repo.get("cmd-setup").await?, 1);

    Ok(())
}

/// Tests incrementing an existing counter.
///
/// Verifies the upsert adds to the stored value instead of resetting it.
///
/// Expected: previous count plus one
#[tokio::test]
async fn increments_existing_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command_count(db, "btn-gameSel", 41).await?;

    let repo = CommandCountRepository::new(db);
    repo.increment("btn-gameSel").await?;

    assert_eq!(repo.get("btn-gameSel").await?, 42);

    Ok(())
}

/// Tests that counters are tracked independently.
///
/// Expected: each name has its own count, unknown names read as 0
#[tokio::test]
async fn tracks_counters_independently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandCountRepository::new(db);
    repo.increment("cmd-setup").await?;
    repo.increment("cmd-setup").await?;
    repo.increment("cmd-delete").await?;

    assert_eq!(repo.get("cmd-setup").await?, 2);
    assert_eq!(repo.get("cmd-delete").await?, 1);
    assert_eq!(repo.get("btn-joinEvent").await?, 0);

    Ok(())
}
