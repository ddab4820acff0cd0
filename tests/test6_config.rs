use std::time::Duration;

use libsql_adapter::prelude::*;
use tempfile::TempDir;

#[test]
fn test6_builder_round_trips_every_option() {
    let opts = LibsqlOptionsBuilder::new("libsql://db.example.turso.io")
        .auth_token("token-123")
        .sync_url("libsql://primary.example.turso.io")
        .sync_interval(Duration::from_secs(5))
        .debug_logs(DebugLogs::all())
        .use_plural(true)
        .finish();

    assert_eq!(opts.url, "libsql://db.example.turso.io");
    assert_eq!(opts.auth_token.as_deref(), Some("token-123"));
    assert_eq!(
        opts.sync_url.as_deref(),
        Some("libsql://primary.example.turso.io")
    );
    assert_eq!(opts.sync_interval, Some(Duration::from_secs(5)));
    assert_eq!(opts.debug_logs, DebugLogs::all());
    assert!(opts.use_plural);
}

#[test]
fn test6_debug_logs_default_off_all_on() {
    let off = DebugLogs::default();
    let on = DebugLogs::all();
    for operation in [
        Operation::Create,
        Operation::Update,
        Operation::UpdateMany,
        Operation::Delete,
        Operation::DeleteMany,
        Operation::FindOne,
        Operation::FindMany,
        Operation::Count,
    ] {
        assert!(!off.enabled(operation), "{operation} should default off");
        assert!(on.enabled(operation), "{operation} should be on");
    }
}

#[test]
fn test6_debug_logs_deserialize_from_host_config() -> Result<(), Box<dyn std::error::Error>> {
    let logs: DebugLogs = serde_json::from_str(r#"{"create": true, "findOne": true}"#)?;
    assert!(logs.enabled(Operation::Create));
    assert!(logs.enabled(Operation::FindOne));
    assert!(!logs.enabled(Operation::Delete));
    Ok(())
}

#[test]
fn test6_use_plural_targets_plural_table() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let dir = TempDir::new()?;
        let db_path = dir.path().join("plural_test.db");
        let (adapter, pool) = LibsqlOptionsBuilder::new(db_path.display().to_string())
            .use_plural(true)
            .build()
            .await?;

        let conn = pool.get().await?;
        conn.execute_batch("CREATE TABLE users (id TEXT PRIMARY KEY, name TEXT);")
            .await?;

        adapter
            .create(
                "user",
                &[
                    ("id".to_string(), RowValue::Text("u1".into())),
                    ("name".to_string(), RowValue::Text("Alice".into())),
                ],
                None,
                true,
            )
            .await?;

        // the singular model name landed in the plural table
        let raw = execute_select(&conn, "SELECT COUNT(*) as count FROM users", &[]).await?;
        assert_eq!(
            raw.results[0].get("count").unwrap().as_int(),
            Some(&1)
        );
        assert_eq!(adapter.count("user", &[]).await?, 1);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test6_connect_exposes_a_usable_pool_handle() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let dir = TempDir::new()?;
        let db_path = dir.path().join("handle_test.db");
        let (adapter, pool) = LibsqlOptionsBuilder::new(db_path.display().to_string())
            .build()
            .await?;

        // raw DDL and DML through the returned handle are visible to the
        // adapter's operations
        let conn = pool.get().await?;
        conn.execute_batch(
            "CREATE TABLE session (id TEXT PRIMARY KEY, token TEXT);
             INSERT INTO session (id, token) VALUES ('s1', 'tok');",
        )
        .await?;

        let session = adapter
            .find_one(
                "session",
                &[WhereCondition::new("id", RowValue::Text("s1".into()))],
                None,
            )
            .await?
            .expect("seeded session");
        assert_eq!(session.get("token").unwrap().as_text().unwrap(), "tok");
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}
