//! Inquiry DTOs - Data Transfer Objects per le richieste di contatto

use crate::entities::Inquiry;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    // cifre, spazi e separatori comuni nei numeri di telefono
    static ref PHONE: Regex = Regex::new(r"^\+?[0-9][0-9 ().\-]{5,19}$").unwrap();
}

/// DTO in ingresso dal form di contatto del sito
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ContactFormDTO {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE.is_match(phone) {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

/// DTO in uscita verso il pannello amministrativo
#[derive(Serialize, Deserialize, Debug)]
pub struct InquiryDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryDTO {
    fn from(value: Inquiry) -> Self {
        Self {
            id: value.inquiry_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactFormDTO {
        ContactFormDTO {
            name: "Paolo Bianchi".to_string(),
            email: "paolo@example.com".to_string(),
            phone: Some("+39 055 123456".to_string()),
            message: "Vorrei un preventivo per una libreria su misura.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_phone_is_optional() {
        let mut f = form();
        f.phone = None;
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_bad_phone() {
        let mut f = form();
        f.phone = Some("call me maybe".to_string());
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_message_too_short() {
        let mut f = form();
        f.message = "ciao".to_string();
        assert!(f.validate().is_err());
    }
}
