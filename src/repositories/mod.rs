//! Repositories module - Coordinatore per tutti gli store del progetto
//!
//! Questo modulo organizza gli store in sotto-moduli separati per una migliore
//! manutenibilità. Le interfacce vivono in `traits`; i middleware e gli
//! handler dipendono solo da quelle.

// Dichiarazione dei sotto-moduli
pub mod inquiry;
pub mod memory;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{InquiryStore, StoreError, UserDirectory};

// Re-esportazione delle struct per facilitare l'import
pub use inquiry::MySqlInquiryStore;
pub use memory::{InMemoryInquiryStore, InMemoryUserDirectory};
pub use user::MySqlUserDirectory;
