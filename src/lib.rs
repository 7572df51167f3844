//! Server library - espone i moduli principali per i test

pub mod config;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod mailer;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::config::Config;
pub use crate::core::{AppError, AppState, AuthConfig, auth};
pub use crate::services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::services::*;

    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .route("/contact", post(submit_contact))
        .nest("/admin", configure_admin_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes di autenticazione (login, register)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

/// Configura le routes del pannello amministrativo.
/// I layer girano dal basso verso l'alto: prima authentication (aggancia le
/// claims), poi admin_authorization (ruolo e stato via directory).
fn configure_admin_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::{admin_authorization_middleware, authentication_middleware};
    use crate::services::*;

    Router::new()
        .route("/users", get(list_users))
        .route("/inquiries", get(list_inquiries))
        .route("/inquiries/{inquiry_id}", delete(delete_inquiry))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_authorization_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
