//! Connection configuration and pool setup.
//!
//! Options cover the three libsql deployment shapes: a local database file,
//! a remote (Turso) database, and an embedded replica of a remote database
//! synced on an interval. None of these affect how statements are built;
//! they only decide what the pool connects to.

use std::time::Duration;

use deadpool_libsql::{Manager, Pool};
use serde::{Deserialize, Serialize};

use crate::error::AdapterError;
use crate::types::Operation;

/// Per-operation debug logging toggles.
///
/// Mirrors the host framework's debug-log configuration shape, so it can be
/// deserialized straight from the host's config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebugLogs {
    pub create: bool,
    pub update: bool,
    pub update_many: bool,
    pub delete: bool,
    pub delete_many: bool,
    pub find_one: bool,
    pub find_many: bool,
    pub count: bool,
}

impl DebugLogs {
    /// Enable logging for every operation.
    #[must_use]
    pub fn all() -> Self {
        Self {
            create: true,
            update: true,
            update_many: true,
            delete: true,
            delete_many: true,
            find_one: true,
            find_many: true,
            count: true,
        }
    }

    #[must_use]
    pub fn enabled(&self, operation: Operation) -> bool {
        match operation {
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::UpdateMany => self.update_many,
            Operation::Delete => self.delete,
            Operation::DeleteMany => self.delete_many,
            Operation::FindOne => self.find_one,
            Operation::FindMany => self.find_many,
            Operation::Count => self.count,
        }
    }
}

/// Options for connecting the adapter to a libsql database.
#[derive(Debug, Clone)]
pub struct LibsqlOptions {
    /// Database URL: a file path, a `file:` URL, `:memory:`, or a remote
    /// `libsql://`/`http(s)://` URL
    pub url: String,
    /// Authentication token for remote databases
    pub auth_token: Option<String>,
    /// Remote URL to sync an embedded replica from; when set, `url` is the
    /// local replica path
    pub sync_url: Option<String>,
    /// Sync interval for embedded replicas
    pub sync_interval: Option<Duration>,
    /// Debug logging toggles
    pub debug_logs: DebugLogs,
    /// Whether table names are pluralized (`user` -> `users`)
    pub use_plural: bool,
}

impl LibsqlOptions {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: None,
            sync_url: None,
            sync_interval: None,
            debug_logs: DebugLogs::default(),
            use_plural: false,
        }
    }
}

/// Fluent builder for [`LibsqlOptions`].
#[derive(Debug, Clone)]
pub struct LibsqlOptionsBuilder {
    opts: LibsqlOptions,
}

impl LibsqlOptionsBuilder {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            opts: LibsqlOptions::new(url),
        }
    }

    #[must_use]
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.opts.auth_token = Some(auth_token.into());
        self
    }

    #[must_use]
    pub fn sync_url(mut self, sync_url: impl Into<String>) -> Self {
        self.opts.sync_url = Some(sync_url.into());
        self
    }

    #[must_use]
    pub fn sync_interval(mut self, sync_interval: Duration) -> Self {
        self.opts.sync_interval = Some(sync_interval);
        self
    }

    #[must_use]
    pub fn debug_logs(mut self, debug_logs: DebugLogs) -> Self {
        self.opts.debug_logs = debug_logs;
        self
    }

    #[must_use]
    pub fn use_plural(mut self, use_plural: bool) -> Self {
        self.opts.use_plural = use_plural;
        self
    }

    #[must_use]
    pub fn finish(self) -> LibsqlOptions {
        self.opts
    }

    /// Connect and return the adapter together with the underlying pool.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::ConnectionError` if database or pool creation
    /// fails.
    pub async fn build(self) -> Result<(crate::adapter::LibsqlAdapter, Pool), AdapterError> {
        crate::adapter::LibsqlAdapter::connect(self.finish()).await
    }
}

/// Build the connection pool an adapter runs on.
pub(crate) async fn build_pool(options: &LibsqlOptions) -> Result<Pool, AdapterError> {
    let local = options.sync_url.is_none() && !is_remote_url(&options.url);

    let db = if let Some(sync_url) = &options.sync_url {
        let mut builder = deadpool_libsql::libsql::Builder::new_remote_replica(
            local_path(&options.url).to_string(),
            sync_url.clone(),
            options.auth_token.clone().unwrap_or_default(),
        );
        if let Some(interval) = options.sync_interval {
            builder = builder.sync_interval(interval);
        }
        builder.build().await.map_err(|e| {
            AdapterError::ConnectionError(format!("Failed to create replica database: {e}"))
        })?
    } else if is_remote_url(&options.url) {
        deadpool_libsql::libsql::Builder::new_remote(
            options.url.clone(),
            options.auth_token.clone().unwrap_or_default(),
        )
        .build()
        .await
        .map_err(|e| {
            AdapterError::ConnectionError(format!("Failed to create remote database: {e}"))
        })?
    } else {
        deadpool_libsql::libsql::Builder::new_local(local_path(&options.url).to_string())
            .build()
            .await
            .map_err(|e| {
                AdapterError::ConnectionError(format!("Failed to create libsql database: {e}"))
            })?
    };

    let manager = Manager::from_libsql_database(db);

    let pool = Pool::builder(manager).build().map_err(|e| {
        AdapterError::ConnectionError(format!("Failed to create libsql pool: {e}"))
    })?;

    // Smoke-test the pool before handing it out
    let conn = pool.get().await.map_err(|e| {
        AdapterError::ConnectionError(format!("Failed to get libsql connection: {e}"))
    })?;

    if local {
        // WAL improves concurrent access on local files; ignore the result
        // for in-memory databases
        let _ = conn.execute("PRAGMA journal_mode = WAL", ()).await;
    }

    Ok(pool)
}

fn is_remote_url(url: &str) -> bool {
    url.starts_with("libsql://")
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("ws://")
        || url.starts_with("wss://")
}

fn local_path(url: &str) -> &str {
    url.strip_prefix("file:").unwrap_or(url)
}
