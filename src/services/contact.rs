//! Contact services - Ricezione del form di contatto e notifica via email

use crate::core::{AppError, AppState};
use crate::dtos::{ContactFormDTO, MessageResponse};
use crate::entities::Inquiry;
use crate::mailer::EmailMessage;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContactFormDTO>, // JSON body
) -> Result<Json<MessageResponse>, AppError> {
    // 1. Validare il form (nome, email, telefono opzionale, messaggio)
    // 2. Archiviare la richiesta PRIMA di tentare l'invio: se l'SMTP è giù
    //    la richiesta resta comunque visibile nel pannello amministrativo
    // 3. Notificare la casella della ditta tramite il mailer
    // 4. Un errore di trasporto diventa un 500 opaco per il client

    body.validate().map_err(|e| {
        warn!("Contact form rejected by validation: {}", e);
        AppError::bad_request("Validation error")
    })?;

    let inquiry = state.inquiries.create(&body).await?;
    info!("Inquiry {} stored", inquiry.inquiry_id);

    let notification = build_notification(&state.contact_inbox, &inquiry);
    match state.mailer.send(&notification).await {
        Ok(message_id) => {
            info!(
                "Inquiry {} notified to {} as {}",
                inquiry.inquiry_id, state.contact_inbox, message_id
            );
            Ok(Json(MessageResponse::ok("Your inquiry has been received.")))
        }
        Err(e) => {
            error!("Failed to notify inquiry {}: {}", inquiry.inquiry_id, e);
            Err(AppError::internal_server_error("Server error"))
        }
    }
}

/// Compone l'email di notifica verso la casella della ditta
fn build_notification(contact_inbox: &str, inquiry: &Inquiry) -> EmailMessage {
    let phone = inquiry.phone.as_deref().unwrap_or("-");
    let text = format!(
        "Nuova richiesta dal sito\n\nNome: {}\nEmail: {}\nTelefono: {}\n\n{}\n",
        inquiry.name, inquiry.email, phone, inquiry.message
    );
    let html = format!(
        "<h2>Nuova richiesta dal sito</h2>\
         <p><b>Nome:</b> {}<br><b>Email:</b> {}<br><b>Telefono:</b> {}</p>\
         <p>{}</p>",
        inquiry.name, inquiry.email, phone, inquiry.message
    );

    EmailMessage {
        to: contact_inbox.to_string(),
        subject: format!("Nuova richiesta dal sito: {}", inquiry.name),
        text,
        html: Some(html),
    }
}
