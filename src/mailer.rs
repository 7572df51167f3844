//! Mailer - Invio email transazionali via SMTP
//!
//! Una sessione di trasporto nuova per ogni invio, un solo tentativo, nessun
//! retry: in caso di errore il chiamante riceve il `MailError` e decide lui
//! la risposta verso il client.

use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Messaggio email transiente: vive solo per la durata di un invio
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid message: {0}")]
    InvalidMessage(String),
    #[error("smtp transport error: {0}")]
    Transport(String),
}

impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailError::InvalidMessage(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::InvalidMessage(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}

/// Interfaccia di invio consumata dagli handler
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Dispatches one message and returns its Message-ID
    async fn send(&self, message: &EmailMessage) -> Result<String, MailError>;
}

pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> SmtpMailer {
        Self { config }
    }

    /// Costruisce il messaggio lettre con mittente fisso e Message-ID esplicito
    fn build_message(&self, message: &EmailMessage) -> Result<(Message, String), MailError> {
        let from = Mailbox::new(
            Some(self.config.from_name.clone()),
            self.config.from_address.parse()?,
        );
        let to: Mailbox = message.to.parse()?;

        // Il dominio del mittente firma il Message-ID che ritorniamo al chiamante
        let domain = self
            .config
            .from_address
            .split('@')
            .next_back()
            .unwrap_or("localhost");
        let message_id = format!("<{}@{}>", Uuid::new_v4(), domain);

        let builder = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .message_id(Some(message_id.clone()));

        let email = match &message.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                html.clone(),
            ))?,
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.text.clone())?,
        };

        Ok((email, message_id))
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    #[instrument(skip(self, message), fields(to = %message.to, subject = %message.subject))]
    async fn send(&self, message: &EmailMessage) -> Result<String, MailError> {
        debug!("Building outgoing email");
        let (email, message_id) = self.build_message(message).map_err(|e| {
            error!("Failed to build email: {}", e);
            e
        })?;

        // sessione nuova ad ogni chiamata, nessun pool
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        match transport.send(email).await {
            Ok(_) => {
                info!("Email dispatched with id {}", message_id);
                Ok(message_id)
            }
            Err(e) => {
                error!("SMTP transport failed: {}", e);
                Err(e.into())
            }
        }
    }
}
