//! Admin services - Endpoint del pannello amministrativo
//!
//! Tutte le route qui sotto stanno dietro la coppia di middleware
//! authentication + admin_authorization: quando un handler gira, le claims
//! sono già state verificate e il ruolo già controllato.

use crate::core::{AppError, AppState, Claims};
use crate::dtos::{InquiryDTO, MessageResponse, UserDTO};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{info, instrument};

#[debug_handler]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    let users = state.users.list().await?;
    info!("Listing {} accounts", users.len());
    let users_dto = users.into_iter().map(UserDTO::from).collect::<Vec<_>>();
    Ok(Json(users_dto))
}

#[instrument(skip(state))]
pub async fn list_inquiries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InquiryDTO>>, AppError> {
    let inquiries = state.inquiries.list().await?;
    info!("Listing {} inquiries", inquiries.len());
    let inquiries_dto = inquiries
        .into_iter()
        .map(InquiryDTO::from)
        .collect::<Vec<_>>();
    Ok(Json(inquiries_dto))
}

#[instrument(skip(state, claims), fields(actor = %claims.user_id))]
pub async fn delete_inquiry(
    State(state): State<Arc<AppState>>,
    Path(inquiry_id): Path<String>,
    Extension(claims): Extension<Claims>, // agganciate dall'authentication middleware
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.inquiries.delete(&inquiry_id).await?;
    if !deleted {
        return Err(AppError::not_found("Inquiry not found"));
    }

    info!("Inquiry {} deleted by {}", inquiry_id, claims.user_id);
    Ok(Json(MessageResponse::ok("Inquiry deleted.")))
}
