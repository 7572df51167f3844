//! MySqlUserDirectory - Directory utenti su MySQL

use super::{StoreError, UserDirectory};
use crate::dtos::CreateUserDTO;
use crate::entities::{User, UserRole, UserStatus};
use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

pub struct MySqlUserDirectory {
    connection_pool: MySqlPool,
}

impl MySqlUserDirectory {
    pub fn new(connection_pool: MySqlPool) -> MySqlUserDirectory {
        Self { connection_pool }
    }
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, name, email, password, role, status FROM users WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    ///considero l'email univoca
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, name, email, password, role, status FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, data: &CreateUserDTO, password_hash: &str) -> Result<User, StoreError> {
        // La chiave primaria è generata qui, non dal database: la directory
        // è indicizzata per id opachi, mai per auto-increment
        let user = User {
            user_id: Uuid::new_v4().to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
            password: password_hash.to_string(),
            role: UserRole::Customer,
            status: UserStatus::Active,
        };

        sqlx::query(
            "INSERT INTO users (user_id, name, email, password, role, status) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.user_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.role)
        .bind(&user.status)
        .execute(&self.connection_pool)
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT user_id, name, email, password, role, status FROM users ORDER BY name",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }
}
