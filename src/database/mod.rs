use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::models::User;
use crate::utils::error::AppError;

#[cfg(test)]
pub mod memory;

/// Storage collaborator coordinates, read from the environment in main.
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    pub async fn connect(config: &DbConfig) -> Result<Self, sqlx::Error> {
        let url = format!(
            "mysql://{}:{}@{}/{}",
            config.user, config.password, config.host, config.database
        );

        // Connection pool otimizado
        let pool = MySqlPoolOptions::new()
            .max_connections(20) // Max 20 conexões simultâneas
            .min_connections(5) // Mantém 5 conexões sempre vivas
            .idle_timeout(std::time::Duration::from_secs(300)) // 5min idle
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect(&url)
            .await?;

        let db = Self { pool };

        db.ensure_schema().await?;

        Ok(db)
    }

    /// Creates the users table on first run. Not a migration system: the
    /// schema is a single fixed table.
    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        log::info!("🔧 Ensuring users table exists...");

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        log::info!("✅ Database schema ready");

        Ok(())
    }
}

/// Storage seam for the user resource. Every method issues exactly one
/// parameterized statement; user input never reaches the query text itself.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a row and returns the id storage assigned to it.
    async fn insert(&self, name: &str, email: &str) -> Result<u64, AppError>;

    /// All rows, storage-native order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, AppError>;

    /// Returns false when no row matched `id`.
    async fn update(&self, id: u64, name: &str, email: &str) -> Result<bool, AppError>;

    /// Returns false when no row matched `id`.
    async fn delete(&self, id: u64) -> Result<bool, AppError>;
}

#[async_trait]
impl UserStore for Database {
    async fn insert(&self, name: &str, email: &str) -> Result<u64, AppError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_id())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: u64, name: &str, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: u64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
