use arredo_server::core::{AppState, AuthConfig};
use arredo_server::entities::{User, UserRole, UserStatus};
use arredo_server::mailer::{EmailMessage, MailError, MailSender};
use arredo_server::repositories::{InMemoryInquiryStore, InMemoryUserDirectory};
use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub const TEST_JWT_SECRET: &str = "un segreto di test che va assolutamente cambiato";
pub const TEST_CONTACT_INBOX: &str = "info@arredo.example";

/// Mailer che registra i messaggi invece di spedirli
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String, MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok("<test@arredo.example>".to_string())
    }
}

/// Mailer che fallisce sempre con un errore di trasporto
pub struct FailingMailer;

#[async_trait]
impl MailSender for FailingMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<String, MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }
}

/// Contesto condiviso dai test: stato applicativo più le maniglie verso gli
/// store in memoria e la posta registrata
pub struct TestContext {
    pub state: Arc<AppState>,
    pub users: Arc<InMemoryUserDirectory>,
    pub inquiries: Arc<InMemoryInquiryStore>,
    pub outbox: Arc<RecordingMailer>,
}

/// Crea un AppState per i test con directory e archivio in memoria
pub fn create_test_context() -> TestContext {
    let users = Arc::new(InMemoryUserDirectory::new());
    let inquiries = Arc::new(InMemoryInquiryStore::new());
    let outbox = Arc::new(RecordingMailer::default());

    let state = Arc::new(AppState::new(
        users.clone(),
        inquiries.clone(),
        outbox.clone(),
        test_auth_config(),
        TEST_CONTACT_INBOX.to_string(),
    ));

    TestContext {
        state,
        users,
        inquiries,
        outbox,
    }
}

/// Come create_test_context, ma con un mailer che fallisce sempre
pub fn create_test_context_with_failing_mailer() -> TestContext {
    let ctx = create_test_context();
    let state = Arc::new(AppState::new(
        ctx.users.clone(),
        ctx.inquiries.clone(),
        Arc::new(FailingMailer),
        test_auth_config(),
        TEST_CONTACT_INBOX.to_string(),
    ));
    TestContext { state, ..ctx }
}

fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        exempt_user_ids: HashSet::from(["admin".to_string()]),
    }
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = arredo_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Inserisce un utente in directory con password già hashata
pub fn seed_user(
    ctx: &TestContext,
    user_id: &str,
    email: &str,
    password: &str,
    role: UserRole,
    status: UserStatus,
) {
    let user = User {
        user_id: user_id.to_string(),
        name: format!("Utente {}", user_id),
        email: email.to_string(),
        password: User::hash_password(password).expect("hashing should succeed"),
        role,
        status,
    };
    ctx.users.insert(user);
}

/// Genera un JWT token per testing, valido 24 ore
pub fn create_test_jwt(user_id: &str) -> String {
    create_jwt_with(user_id, TEST_JWT_SECRET, 24 * 3600)
}

/// Genera un JWT scaduto da oltre un'ora (oltre la leeway di validazione)
pub fn create_expired_jwt(user_id: &str) -> String {
    create_jwt_with(user_id, TEST_JWT_SECRET, -3600)
}

/// Genera un JWT firmato con un secret diverso da quello del server
pub fn create_foreign_jwt(user_id: &str) -> String {
    create_jwt_with(user_id, "un segreto completamente diverso", 24 * 3600)
}

fn create_jwt_with(user_id: &str, jwt_secret: &str, validity_secs: i64) -> String {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        #[serde(rename = "userId")]
        user_id: String,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now().timestamp();
    let claims = Claims {
        user_id: user_id.to_string(),
        exp: (now + validity_secs) as usize,
        iat: (now + validity_secs - 24 * 3600) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}
