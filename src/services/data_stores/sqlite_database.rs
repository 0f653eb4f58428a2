use std::path::Path;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection, Executor,
};

const CREATE_VEHICLES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ramal INTEGER NOT NULL,
        setor TEXT NOT NULL,
        plate TEXT NOT NULL,
        model TEXT NOT NULL,
        cor TEXT NOT NULL
    )
"#;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        fullname TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL
    )
"#;

/// Handle to the SQLite file shared by every store.
///
/// There is no pool: each store operation opens a fresh connection and drops
/// it before returning. Handlers run one operation per request, so nothing
/// but the file itself is shared between requests.
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    options: SqliteConnectOptions,
}

impl SqliteDatabase {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self { options }
    }

    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }

    /// Creates the `vehicles` and `users` tables if they are absent.
    #[tracing::instrument(name = "Ensuring SQLite schema", skip_all)]
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        let mut connection = self.connect().await?;
        connection.execute(CREATE_VEHICLES_TABLE).await?;
        connection.execute(CREATE_USERS_TABLE).await?;
        connection.close().await
    }
}
