use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::HeaderMap, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Esito negativo della verifica di un token. La distinzione serve solo al
/// log del server: verso il client i tre casi collassano in un unico 401.
#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token malformed")]
    Malformed,
}

#[instrument(skip(secret), fields(user_id = %user_id))]
pub fn encode_jwt(user_id: &str, secret: &str) -> Result<String, AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;
    let claim = Claims {
        iat,
        exp,
        user_id: user_id.to_string(),
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        AppError::internal_server_error("Server error")
    })
}

/// Verifica pura del token contro il secret condiviso: nessun side effect,
/// nessuno stato. Firma, scadenza e struttura vengono controllate qui.
pub fn verify_jwt(jwt_token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })
}

/// Estrae il candidato token dalla richiesta: prima l'header
/// `Authorization: Bearer <token>`, altrimenti il cookie `token`.
/// Un header presente ma non in forma Bearer ricade sul cookie.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(http::header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                let token = token.trim();
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    let cookies = headers.get(http::header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    // 1. Estrarre il candidato token (header Bearer, altrimenti cookie)
    // 2. Se non c'è nessun candidato, rifiutare con 401 senza invocare il verifier
    // 3. Verificare il token; in caso di successo agganciare le claims alla request
    // 4. In caso di fallimento, 401 con messaggio uniforme (la causa va solo nel log)
    let token = match extract_token(req.headers()) {
        Some(token) => token,
        None => {
            warn!("No token candidate in request");
            return Err(AppError::unauthorized("No token, authorization denied."));
        }
    };

    let claims = match verify_jwt(&token, &state.auth.jwt_secret) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("JWT verification failed: {}", e);
            return Err(AppError::unauthorized("Token is not valid."));
        }
    };

    info!("Request authenticated for user {}", claims.user_id);
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware che impone l'accesso di livello amministrativo.
/// Gira solo dopo authentication_middleware: consuma le claims agganciate
/// alla request e consulta la directory utenti.
///
/// L'ordine dei controlli è fisso e non va riordinato: esistenza, poi ruolo,
/// poi stato. Un admin sospeso viene rifiutato per lo stato, non per il
/// ruolo, così il client riceve il messaggio giusto.
#[instrument(skip(state, req, next))]
pub async fn admin_authorization_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running admin authorization middleware");
    let claims = req.extensions().get::<Claims>().cloned().ok_or_else(|| {
        warn!("Claims not found in request extensions");
        AppError::unauthorized("No token, authorization denied.")
    })?;

    // Account operatore esenti dal lookup: passano subito
    if state.auth.exempt_user_ids.contains(&claims.user_id) {
        info!("Exempt identifier {}, skipping directory lookup", claims.user_id);
        return Ok(next.run(req).await);
    }

    match state.users.find_by_id(&claims.user_id).await {
        Ok(None) => {
            warn!("User {} not found in directory", claims.user_id);
            Err(AppError::forbidden("Access denied. User not found."))
        }
        Ok(Some(user)) => {
            if !user.role.is_privileged() {
                warn!("User {} has insufficient role {:?}", user.user_id, user.role);
                return Err(AppError::forbidden(
                    "Access denied. Admin privileges required.",
                ));
            }
            if !user.is_active() {
                warn!("User {} account is {:?}", user.user_id, user.status);
                return Err(AppError::forbidden(
                    "Access denied. Account is not active.",
                ));
            }
            info!("Admin access granted to {}", user.user_id);
            Ok(next.run(req).await)
        }
        Err(e) => {
            error!("Directory lookup failed: {}", e);
            Err(AppError::internal_server_error("Server error"))
        }
    }
}
