//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione, autorizzazione e JWT
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{
    Claims, TokenError, admin_authorization_middleware, authentication_middleware, encode_jwt,
    verify_jwt,
};
pub use error::AppError;
pub use state::{AppState, AuthConfig};
