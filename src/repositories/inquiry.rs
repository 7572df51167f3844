//! MySqlInquiryStore - Archivio richieste di contatto su MySQL

use super::{InquiryStore, StoreError};
use crate::dtos::ContactFormDTO;
use crate::entities::Inquiry;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

pub struct MySqlInquiryStore {
    connection_pool: MySqlPool,
}

impl MySqlInquiryStore {
    pub fn new(connection_pool: MySqlPool) -> MySqlInquiryStore {
        Self { connection_pool }
    }
}

#[async_trait]
impl InquiryStore for MySqlInquiryStore {
    async fn create(&self, data: &ContactFormDTO) -> Result<Inquiry, StoreError> {
        let inquiry = Inquiry {
            inquiry_id: Uuid::new_v4().to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            message: data.message.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO inquiries (inquiry_id, name, email, phone, message, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&inquiry.inquiry_id)
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.message)
        .bind(inquiry.created_at)
        .execute(&self.connection_pool)
        .await?;

        Ok(inquiry)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, StoreError> {
        let inquiries = sqlx::query_as::<_, Inquiry>(
            "SELECT inquiry_id, name, email, phone, message, created_at FROM inquiries ORDER BY created_at DESC",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(inquiries)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM inquiries WHERE inquiry_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
