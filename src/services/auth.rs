//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, LoginDTO, MessageResponse, UserDTO};
use crate::entities::User;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Cercare l'utente in directory tramite email
    // 2. Se l'utente non esiste o la password non corrisponde, 401 con messaggio
    //    unico (non riveliamo quale dei due controlli è fallito)
    // 3. Se l'account è sospeso, 403: un account non attivo non ottiene token
    // 4. Generare il token JWT e ritornarlo sia nel cookie HttpOnly che
    //    nell'header Authorization

    let user = match state.users.find_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized("Invalid email or password."));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Login attempt with wrong password for user {}", user.user_id);
        return Err(AppError::unauthorized("Invalid email or password."));
    }

    if !user.is_active() {
        warn!("Login attempt for non-active account {}", user.user_id);
        return Err(AppError::forbidden("Access denied. Account is not active."));
    }

    let token = encode_jwt(&user.user_id, &state.auth.jwt_secret)?;

    let cookie_value = format!(
        "token={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
        token,
        24 * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        "Set-Cookie",
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Server error"))?,
    );
    headers.insert(
        "Authorization",
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Server error"))?,
    );

    info!("User {} logged in", user.user_id);
    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse::ok("Login successful.")),
    ))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>, // JSON body
) -> Result<Json<UserDTO>, AppError> {
    // 1. Validare il DTO con validator (nome, email, robustezza password)
    // 2. Controllare se esiste già un account con la stessa email
    // 3. Generare l'hash bcrypt e creare l'account come customer attivo
    // 4. Ritornare il DTO dell'utente creato (mai l'hash)

    body.validate().map_err(|e| {
        warn!("Registration rejected by validation: {}", e);
        AppError::bad_request("Validation error")
    })?;

    if state.users.find_by_email(&body.email).await?.is_some() {
        return Err(AppError::conflict("Email already registered"));
    }

    let password_hash = User::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let created_user = state.users.create(&body, &password_hash).await?;

    info!("New account {} registered", created_user.user_id);
    Ok(Json(UserDTO::from(created_user)))
}
