//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod admin;
pub mod auth;
pub mod contact;

// Re-exports per facilitare l'import
pub use admin::{delete_inquiry, list_inquiries, list_users};
pub use auth::{login_user, register_user};
pub use contact::submit_contact;

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
