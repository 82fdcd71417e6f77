//! User repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;

use crate::models::{AuthUser, CreatedUser, CredentialRow, NewUser, UserRecord};

/// User repository backed by the users database
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users, ordered by id
    ///
    /// The credential column is never selected here.
    pub async fn list_all(&self) -> Result<Vec<UserRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, full_name, nick_name, email, phone, address, birthday
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .into_iter()
            .map(|row| UserRecord {
                id: row.get("id"),
                full_name: row.get("full_name"),
                nick_name: row.get("nick_name"),
                email: row.get("email"),
                phone: row.get("phone"),
                address: row.get("address"),
                birthday: row.get("birthday"),
            })
            .collect();

        Ok(users)
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, full_name, nick_name, email, phone, address, birthday
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let user = UserRecord {
                    id: row.get("id"),
                    full_name: row.get("full_name"),
                    nick_name: row.get("nick_name"),
                    email: row.get("email"),
                    phone: row.get("phone"),
                    address: row.get("address"),
                    birthday: row.get("birthday"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Find a user by email, selecting only the columns needed for authentication
    ///
    /// Email comparison is an exact match; no case folding is applied.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>> {
        let row = sqlx::query(
            r#"
            SELECT id, full_name, nick_name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let user = AuthUser {
                    id: row.get("id"),
                    full_name: row.get("full_name"),
                    nick_name: row.get("nick_name"),
                    email: row.get("email"),
                    password: row.get("password"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Whether a user with the given email already exists
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Insert a new user with an already-hashed credential
    ///
    /// Returns only the columns that are safe to echo back; the credential
    /// is never part of the returned row.
    pub async fn insert(&self, new_user: &NewUser, credential: &str) -> Result<CreatedUser> {
        info!("Creating user: {}", new_user.email);

        let row = sqlx::query(
            r#"
            INSERT INTO users (full_name, nick_name, email, password, phone, address, birthday)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, full_name, nick_name, email
            "#,
        )
        .bind(&new_user.full_name)
        .bind(&new_user.nick_name)
        .bind(&new_user.email)
        .bind(credential)
        .bind(&new_user.phone)
        .bind(&new_user.address)
        .bind(new_user.birthday)
        .fetch_one(&self.pool)
        .await?;

        let created = CreatedUser {
            id: row.get("id"),
            full_name: row.get("full_name"),
            nick_name: row.get("nick_name"),
            email: row.get("email"),
        };

        Ok(created)
    }

    /// Replace the stored credential of a single user
    pub async fn update_password(&self, id: i32, credential: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
            .bind(credential)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Scan all stored credentials, the input set for the password migration
    pub async fn list_credentials(&self) -> Result<Vec<CredentialRow>> {
        let rows = sqlx::query("SELECT id, password FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let credentials = rows
            .into_iter()
            .map(|row| CredentialRow {
                id: row.get("id"),
                password: row.get("password"),
            })
            .collect();

        Ok(credentials)
    }
}
