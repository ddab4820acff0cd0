use deadpool_libsql::Pool;
use libsql_adapter::prelude::*;
use tempfile::TempDir;

async fn setup() -> Result<(LibsqlAdapter, Pool, TempDir), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("count_test.db");
    let (adapter, pool) = LibsqlOptionsBuilder::new(db_path.display().to_string())
        .build()
        .await?;

    let conn = pool.get().await?;
    conn.execute_batch(
        "CREATE TABLE user (
            id TEXT PRIMARY KEY,
            name TEXT,
            age INTEGER
        );",
    )
    .await?;

    Ok((adapter, pool, dir))
}

async fn seed(adapter: &LibsqlAdapter) -> Result<(), Box<dyn std::error::Error>> {
    for (id, name, age) in [("u1", "Alice", 28), ("u2", "Bob", 34), ("u3", "Carol", 42)] {
        adapter
            .create(
                "user",
                &[
                    ("id".to_string(), RowValue::Text(id.into())),
                    ("name".to_string(), RowValue::Text(name.into())),
                    ("age".to_string(), RowValue::Int(age)),
                ],
                None,
                true,
            )
            .await?;
    }
    Ok(())
}

#[test]
fn test5_count_of_empty_table_is_zero() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;
        assert_eq!(adapter.count("user", &[]).await?, 0);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test5_count_matches_seeded_rows() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;
        seed(&adapter).await?;
        assert_eq!(adapter.count("user", &[]).await?, 3);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test5_count_filters_like_find_many() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;
        seed(&adapter).await?;

        let filter = [WhereCondition::with_operator(
            "age",
            "gte",
            RowValue::Int(30),
        )];

        let counted = adapter.count("user", &filter).await?;
        let found = adapter
            .find_many("user", &filter, None, None, None)
            .await?;
        assert_eq!(counted, 2);
        assert_eq!(counted, i64::try_from(found.len())?);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn test5_count_failure_is_tagged_with_the_operation() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let (adapter, _pool, _dir) = setup().await?;

        let err = adapter.count("no_such_table", &[]).await.unwrap_err();
        match err {
            AdapterError::OperationFailed { operation, message } => {
                assert_eq!(operation, Operation::Count);
                assert!(!message.is_empty());
            }
            other => panic!("expected OperationFailed, got {other:?}"),
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}
