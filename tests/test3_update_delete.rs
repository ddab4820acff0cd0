use deadpool_libsql::Pool;
use libsql_adapter::prelude::*;
use tempfile::TempDir;

async fn setup() -> Result<(LibsqlAdapter, Pool, TempDir), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("update_test.db");
    let (adapter, pool) = LibsqlOptionsBuilder::new(db_path.display().to_string())
        .build()
        .await?;

    let conn = pool.get().await?;
    conn.execute_batch(
        "CREATE TABLE user (
            id TEXT PRIMARY KEY,
            name TEXT,
            age INTEGER,
            active INTEGER
        );",
    )
    .await?;

    for (id, name, age, active) in [
        ("u1", "Alice", 28, true),
        ("u2", "Bob", 34, true),
        ("u3", "Carol", 42, false),
    ] {
        adapter
            .create(
                "user",
                &[
                    ("id".to_string(), RowValue::Text(id.into())),
                    ("name".to_string(), RowValue::Text(name.into())),
                    ("age".to_string(), RowValue::Int(age)),
                    ("active".to_string(), RowValue::Bool(active)),
                ],
                None,
                true,
            )
            .await?;
    }

    Ok((adapter, pool, dir))
}

#[test]
fn test3_update_returns_the_updated_row() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        let updated = adapter
            .update(
                "user",
                &[WhereCondition::new("id", RowValue::Text("u1".into()))],
                &[("name".to_string(), RowValue::Text("Bob".into()))],
            )
            .await?
            .expect("u1 exists");
        assert_eq!(updated.get("id").unwrap().as_text().unwrap(), "u1");
        assert_eq!(updated.get("name").unwrap().as_text().unwrap(), "Bob");

        // and it stuck
        let found = adapter
            .find_one(
                "user",
                &[WhereCondition::new("id", RowValue::Text("u1".into()))],
                None,
            )
            .await?
            .unwrap();
        assert_eq!(found.get("name").unwrap().as_text().unwrap(), "Bob");
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test3_update_without_match_returns_none() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        let updated = adapter
            .update(
                "user",
                &[WhereCondition::new("id", RowValue::Text("missing".into()))],
                &[("name".to_string(), RowValue::Text("Nobody".into()))],
            )
            .await?;
        assert!(updated.is_none());
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test3_update_many_reports_affected_rows() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        let affected = adapter
            .update_many(
                "user",
                &[WhereCondition::with_operator("age", "gte", RowValue::Int(30))],
                &[("active".to_string(), RowValue::Bool(false))],
            )
            .await?;
        assert_eq!(affected, 2);

        let inactive = adapter
            .count(
                "user",
                &[WhereCondition::new("active", RowValue::Bool(false))],
            )
            .await?;
        assert_eq!(inactive, 2);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test3_delete_of_missing_row_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        adapter
            .delete(
                "user",
                &[WhereCondition::new("id", RowValue::Text("missing".into()))],
            )
            .await?;

        // nothing was removed
        assert_eq!(adapter.count("user", &[]).await?, 3);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test3_delete_removes_the_row() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        adapter
            .delete(
                "user",
                &[WhereCondition::new("id", RowValue::Text("u1".into()))],
            )
            .await?;

        let found = adapter
            .find_one(
                "user",
                &[WhereCondition::new("id", RowValue::Text("u1".into()))],
                None,
            )
            .await?;
        assert!(found.is_none());
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test3_delete_many_reports_affected_rows() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        let deleted = adapter
            .delete_many(
                "user",
                &[WhereCondition::new("active", RowValue::Bool(true))],
            )
            .await?;
        assert_eq!(deleted, 2);
        assert_eq!(adapter.count("user", &[]).await?, 1);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}
