//! Application State - Stato globale dell'applicazione
//!
//! Contiene le interfacce verso i collaboratori esterni (directory utenti,
//! archivio richieste, mailer) e la configurazione di autenticazione.
//! Costruito una volta in `main` e condiviso tra route e middleware.

use crate::mailer::MailSender;
use crate::repositories::{InquiryStore, UserDirectory};
use std::collections::HashSet;
use std::sync::Arc;

/// Configurazione consumata dai due gate di autenticazione/autorizzazione
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key per la firma dei token JWT
    pub jwt_secret: String,

    /// Identificatori che il gate amministrativo lascia passare senza lookup
    /// in directory (account operatore non presenti tra gli utenti).
    /// Da configurazione, mai hardcoded nel codice del gate.
    pub exempt_user_ids: HashSet<String>,
}

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Directory degli account (ruolo e stato), indicizzata per id
    pub users: Arc<dyn UserDirectory>,

    /// Archivio delle richieste dal form di contatto
    pub inquiries: Arc<dyn InquiryStore>,

    /// Canale di invio email transazionali
    pub mailer: Arc<dyn MailSender>,

    /// Configurazione dei gate
    pub auth: AuthConfig,

    /// Casella della ditta che riceve le notifiche dal form di contatto
    pub contact_inbox: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState con i collaboratori forniti.
    /// In produzione arrivano da MySQL + SMTP, nei test dalle implementazioni
    /// in memoria: lo stato non sa quale delle due sta usando.
    pub fn new(
        users: Arc<dyn UserDirectory>,
        inquiries: Arc<dyn InquiryStore>,
        mailer: Arc<dyn MailSender>,
        auth: AuthConfig,
        contact_inbox: String,
    ) -> Self {
        Self {
            users,
            inquiries,
            mailer,
            auth,
            contact_inbox,
        }
    }
}
