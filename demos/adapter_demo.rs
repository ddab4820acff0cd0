//! Adapter demonstration.
//!
//! Shows the full operation surface against a local libsql database.
//! Run with: cargo run --example adapter_demo

use libsql_adapter::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 LibSQL Adapter Demo");
    println!("======================");

    let db_path = std::env::temp_dir().join("libsql_adapter_demo.db");
    let _ = std::fs::remove_file(&db_path);

    println!("📊 Connecting...");
    let (adapter, pool) = LibsqlOptionsBuilder::new(db_path.display().to_string())
        .debug_logs(DebugLogs::all())
        .build()
        .await?;
    println!("✅ Connected (pool handle returned alongside the adapter)");

    // Schema setup goes through the raw pool handle; the adapter itself
    // never manages schema.
    println!("\n📋 Creating table...");
    let conn = pool.get().await?;
    conn.execute_batch(
        "CREATE TABLE user (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE,
            age INTEGER,
            active INTEGER
        );",
    )
    .await?;
    println!("✅ Table created");

    println!("\n📝 Creating records...");
    for (id, name, email, age, active) in [
        ("u1", "Alice Johnson", "alice@example.com", 28, true),
        ("u2", "Bob Smith", "bob@example.com", 34, true),
        ("u3", "Carol Davis", "carol@example.com", 42, false),
    ] {
        let record = adapter
            .create(
                "user",
                &[
                    ("id".to_string(), RowValue::Text(id.into())),
                    ("name".to_string(), RowValue::Text(name.into())),
                    ("email".to_string(), RowValue::Text(email.into())),
                    ("age".to_string(), RowValue::Int(age)),
                    ("active".to_string(), RowValue::Bool(active)),
                ],
                None,
                true,
            )
            .await?;
        println!(
            "  ➕ {}",
            record.get("name").and_then(RowValue::as_text).unwrap_or("?")
        );
    }

    println!("\n🔍 find_one by email...");
    let alice = adapter
        .find_one(
            "user",
            &[WhereCondition::new(
                "email",
                RowValue::Text("alice@example.com".into()),
            )],
            None,
        )
        .await?
        .expect("alice exists");
    println!(
        "  Found {} (age {})",
        alice.get("name").unwrap().as_text().unwrap(),
        alice.get("age").unwrap().as_int().unwrap()
    );

    println!("\n📑 find_many, thirty and older, oldest first...");
    let seniors = adapter
        .find_many(
            "user",
            &[WhereCondition::with_operator(
                "age",
                "gte",
                RowValue::Int(30),
            )],
            Some(&SortSpec::desc("age")),
            None,
            None,
        )
        .await?;
    for row in &seniors {
        println!(
            "  {} ({})",
            row.get("name").unwrap().as_text().unwrap(),
            row.get("age").unwrap().as_int().unwrap()
        );
    }

    println!("\n✏️  update Bob's name...");
    let updated = adapter
        .update(
            "user",
            &[WhereCondition::new("id", RowValue::Text("u2".into()))],
            &[("name".to_string(), RowValue::Text("Robert Smith".into()))],
        )
        .await?
        .expect("u2 exists");
    println!("  Now: {}", updated.get("name").unwrap().as_text().unwrap());

    println!("\n🧮 count active users...");
    let active = adapter
        .count(
            "user",
            &[WhereCondition::new("active", RowValue::Bool(true))],
        )
        .await?;
    println!("  {active} active");

    println!("\n🗑️  delete inactive users...");
    let removed = adapter
        .delete_many(
            "user",
            &[WhereCondition::new("active", RowValue::Bool(false))],
        )
        .await?;
    println!("  Removed {removed}");

    println!("\n✅ Done; {} users remain", adapter.count("user", &[]).await?);

    let _ = std::fs::remove_file(&db_path);
    Ok(())
}
