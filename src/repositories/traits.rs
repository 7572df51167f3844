//! Common repository traits
//!
//! This module defines the interfaces the request handlers and the
//! authorization middleware depend on. The HTTP layer only ever sees these
//! traits plus [`StoreError`]; which backing store is in use (MySQL in
//! production, in-memory in the tests) is decided once at startup.

use crate::dtos::{ContactFormDTO, CreateUserDTO};
use crate::entities::{Inquiry, User};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of the backing store. Callers map this to an opaque 500: the
/// message is for the server log, never for the client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Directory degli account, indicizzata per chiave primaria
///
/// # Returns
/// * `Ok(Some(User))` - record trovato
/// * `Ok(None)` - nessun record con quella chiave
/// * `Err(StoreError)` - directory non raggiungibile
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Reads a user record by its primary key
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Reads a user record by its unique email (login)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Creates a new customer account with an already-hashed password
    async fn create(&self, data: &CreateUserDTO, password_hash: &str) -> Result<User, StoreError>;

    /// Lists every account, newest first
    async fn list(&self) -> Result<Vec<User>, StoreError>;
}

/// Archivio delle richieste arrivate dal form di contatto
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Persists a contact-form submission
    async fn create(&self, data: &ContactFormDTO) -> Result<Inquiry, StoreError>;

    /// Lists every stored inquiry, newest first
    async fn list(&self) -> Result<Vec<Inquiry>, StoreError>;

    /// Deletes an inquiry by primary key
    ///
    /// # Returns
    /// * `Ok(true)` - deleted
    /// * `Ok(false)` - no inquiry with that key
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
