//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Customer,
}

impl UserRole {
    /// True se il ruolo dà accesso all'area amministrativa
    pub fn is_privileged(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Staff)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
}
