//! Inquiry entity - Richieste di contatto/preventivo inviate dal sito

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Una richiesta arrivata dal form di contatto. Viene archiviata prima
/// dell'invio della notifica email, così nessuna richiesta va persa.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Inquiry {
    pub inquiry_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
