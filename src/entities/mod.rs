//! Entities module - Entità di dominio del progetto

pub mod enums;
pub mod inquiry;
pub mod user;

// Re-exports per facilitare l'import
pub use enums::{UserRole, UserStatus};
pub use inquiry::Inquiry;
pub use user::User;
