//! User DTOs - Data Transfer Objects per utenti

use crate::entities::{User, UserRole, UserStatus};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    static ref HAS_UPPERCASE: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref HAS_LOWERCASE: Regex = Regex::new(r"[a-z]").unwrap();
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
}

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.user_id,
            name: value.name,
            email: value.email,
            role: value.role,
            status: value.status,
            // la password hashata non lascia mai il server!!!
        }
    }
}

/// DTO per il login (solo email e password)
#[derive(Deserialize, Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

/// DTO per creare un nuovo utente (senza user_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = validate_password))]
    pub password: String,
}

/// Almeno 8 caratteri, con maiuscola, minuscola e cifra
fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8
        || !HAS_UPPERCASE.is_match(password)
        || !HAS_LOWERCASE.is_match(password)
        || !HAS_DIGIT.is_match(password)
    {
        return Err(ValidationError::new("password_too_weak"));
    }
    Ok(())
}
