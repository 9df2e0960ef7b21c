//! Row models and DTOs, one module per table.

pub mod agenda;
pub mod case;
pub mod client;
pub mod contact;
pub mod dashboard;
pub mod equipment;
pub mod session;
pub mod transaction;
pub mod user;
