//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod agenda_repo;
pub mod case_repo;
pub mod client_repo;
pub mod contact_repo;
pub mod dashboard_repo;
pub mod equipment_repo;
pub mod session_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use agenda_repo::AgendaRepo;
pub use case_repo::CaseRepo;
pub use client_repo::ClientRepo;
pub use contact_repo::ContactRepo;
pub use dashboard_repo::DashboardRepo;
pub use equipment_repo::EquipmentRepo;
pub use session_repo::SessionRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
