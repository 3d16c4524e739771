use crate::types::{AppError, Result, Team};
use chrono::Utc;
use libsql::{Builder, Connection, Database};

/// SQLite-backed store for users and teams.
///
/// The schema is created on construction. Concurrency correctness is
/// delegated to SQLite's own transaction guarantees.
pub struct SqliteClient {
    db: Database,
}

impl SqliteClient {
    /// Opens (or creates) a database file at `path`.
    pub async fn new_local(path: &str) -> Result<Self> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        let client = Self { db };
        client.initialize_schema().await?;

        Ok(client)
    }

    /// Opens an ephemeral in-memory database, lost on drop.
    pub async fn new_memory() -> Result<Self> {
        Self::new_local(":memory:").await
    }

    pub fn connection(&self) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))
    }

    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        // Users table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

        // Teams table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                location TEXT NOT NULL,
                manager TEXT NOT NULL,
                captain TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create teams table: {}", e)))?;

        Ok(())
    }

    // User operations

    pub async fn create_user(
        &self,
        id: &str,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<()> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO users (id, username, password_hash, role, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (id, username, password_hash, role, now, now),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create user: {}", e)))?;

        Ok(())
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, username, password_hash, role, created_at, updated_at
                 FROM users WHERE username = ?",
                [username],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        if let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Ok(Some(User {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                username: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                password_hash: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
                role: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
                updated_at: row.get(5).map_err(|e| AppError::Database(e.to_string()))?,
            }))
        } else {
            Ok(None)
        }
    }

    // Team operations

    pub async fn create_team(
        &self,
        id: &str,
        name: &str,
        location: &str,
        manager: &str,
        captain: &str,
    ) -> Result<Team> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO teams (id, name, location, manager, captain, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (id, name, location, manager, captain, now),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create team: {}", e)))?;

        Ok(Team {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            manager: manager.to_string(),
            captain: captain.to_string(),
        })
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, name, location, manager, captain FROM teams",
                (),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query teams: {}", e)))?;

        let mut teams = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            teams.push(Team {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                location: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
                manager: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
                captain: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
            });
        }

        Ok(teams)
    }
}

/// User record from the database.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let db = SqliteClient::new_memory().await.expect("in-memory db");

        db.create_user("u-1", "alice", "$argon2$fake", "user")
            .await
            .expect("should insert user");

        let user = db
            .get_user_by_username("alice")
            .await
            .expect("should query")
            .expect("user should exist");

        assert_eq!(user.id, "u-1");
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, "user");

        let missing = db.get_user_by_username("bob").await.expect("should query");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected_by_store() {
        let db = SqliteClient::new_memory().await.expect("in-memory db");

        db.create_user("u-1", "alice", "h1", "user")
            .await
            .expect("first insert");

        let result = db.create_user("u-2", "alice", "h2", "user").await;
        assert!(result.is_err(), "UNIQUE constraint should reject duplicate");
    }

    #[tokio::test]
    async fn test_create_and_list_teams() {
        let db = SqliteClient::new_memory().await.expect("in-memory db");

        let team = db
            .create_team("t-1", "Tigers", "Seoul", "Kim", "Lee")
            .await
            .expect("should insert team");

        assert_eq!(team.id, "t-1");
        assert_eq!(team.name, "Tigers");

        let teams = db.list_teams().await.expect("should list");
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].location, "Seoul");
        assert_eq!(teams[0].manager, "Kim");
        assert_eq!(teams[0].captain, "Lee");
    }
}
