//! User entity - Entità utente con metodi per gestione password

use super::{UserRole, UserStatus};
use bcrypt::{DEFAULT_COST, hash, verify};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, DEFAULT_COST)?;
        Ok(hash)
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(password_hash: String) -> User {
        User {
            user_id: "u-1".to_string(),
            name: "Giulia Moretti".to_string(),
            email: "giulia@example.com".to_string(),
            password: password_hash,
            role: UserRole::Staff,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_password_roundtrip() {
        let hash = User::hash_password("Scrivania42").expect("hashing should succeed");
        let user = sample_user(hash);
        assert!(user.verify_password("Scrivania42"));
        assert!(!user.verify_password("scrivania42"));
    }

    #[test]
    fn test_verify_with_garbage_hash() {
        let user = sample_user("not-a-bcrypt-hash".to_string());
        assert!(!user.verify_password("anything"));
    }
}
