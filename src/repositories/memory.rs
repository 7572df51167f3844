//! In-memory stores - Implementazioni in memoria delle interfacce repository
//!
//! Usate nei test di integrazione per esercitare router e middleware senza un
//! database: stesso contratto delle implementazioni MySQL, con in più
//! l'iniezione di guasti (`set_unavailable`) per il percorso 500.

use super::{InquiryStore, StoreError, UserDirectory};
use crate::dtos::{ContactFormDTO, CreateUserDTO};
use crate::entities::{Inquiry, User, UserRole, UserStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<User>>,
    unavailable: AtomicBool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserisce direttamente un record, bypassando la creazione via DTO
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// Simula una directory non raggiungibile: ogni chiamata successiva
    /// ritorna `StoreError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("directory offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.check_available()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.user_id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check_available()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &CreateUserDTO, password_hash: &str) -> Result<User, StoreError> {
        self.check_available()?;
        let user = User {
            user_id: Uuid::new_v4().to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
            password: password_hash.to_string(),
            role: UserRole::Customer,
            status: UserStatus::Active,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.check_available()?;
        Ok(self.users.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryInquiryStore {
    inquiries: Mutex<Vec<Inquiry>>,
}

impl InMemoryInquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.inquiries.lock().unwrap().len()
    }
}

#[async_trait]
impl InquiryStore for InMemoryInquiryStore {
    async fn create(&self, data: &ContactFormDTO) -> Result<Inquiry, StoreError> {
        let inquiry = Inquiry {
            inquiry_id: Uuid::new_v4().to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            message: data.message.clone(),
            created_at: Utc::now(),
        };
        self.inquiries.lock().unwrap().push(inquiry.clone());
        Ok(inquiry)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, StoreError> {
        let mut inquiries = self.inquiries.lock().unwrap().clone();
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(inquiries)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut inquiries = self.inquiries.lock().unwrap();
        let before = inquiries.len();
        inquiries.retain(|i| i.inquiry_id != id);
        Ok(inquiries.len() < before)
    }
}
