use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, Secret};

use super::SqliteDatabase;
use crate::domain::{
    Email, NewUser, PasswordDigest, User, UserId, UserStore, UserStoreError,
};

pub struct SqliteUserStore {
    database: SqliteDatabase,
}

impl SqliteUserStore {
    pub fn new(database: SqliteDatabase) -> Self {
        Self { database }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    fullname: String,
    email: String,
    password: String,
}

#[async_trait::async_trait]
impl UserStore for SqliteUserStore {
    #[tracing::instrument(name = "Adding user to SQLite", skip_all)]
    async fn add_user(&mut self, user: NewUser) -> Result<(), UserStoreError> {
        let mut connection = self
            .database
            .connect()
            .await
            .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?;

        sqlx::query(
            r#"
            INSERT INTO users (fullname, email, password) VALUES (?, ?, ?)
            "#,
        )
        .bind(user.fullname.as_str())
        .bind(user.email.as_ref().expose_secret().as_str())
        .bind(user.password.as_ref().expose_secret().as_str())
        .execute(&mut connection)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::UserAlreadyExists
            }
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from SQLite", skip_all)]
    async fn find_user(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<User, UserStoreError> {
        let mut connection = self
            .database
            .connect()
            .await
            .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?;

        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, fullname, email, password
            FROM users
            WHERE email = ? AND password = ?
            "#,
        )
        .bind(email.as_ref().expose_secret().as_str())
        .bind(digest.as_ref().expose_secret().as_str())
        .fetch_optional(&mut connection)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?
        .map(|row| User {
            id: UserId::new(row.id),
            fullname: row.fullname,
            email: Email::new(Secret::new(row.email)),
            password: PasswordDigest::new(Secret::new(row.password)),
        })
        .ok_or(UserStoreError::UserNotFound)
    }
}
