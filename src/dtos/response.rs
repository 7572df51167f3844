//! Response DTOs - Corpo JSON uniforme `{ success, message }`
//!
//! Tutte le risposte "di esito" (login, contatto, rifiuti dei middleware)
//! usano questa forma; gli endpoint dati ritornano direttamente i DTO.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
