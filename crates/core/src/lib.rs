//! Domain vocabulary shared by the persistence and HTTP layers.
//!
//! Nothing in here touches the database or the network; every rule that can
//! be checked without I/O (role names, case lifecycle values, the contact
//! e-mail pattern, pagination math, dashboard bucketing) lives here so it can
//! be unit tested in isolation.

pub mod cases;
pub mod contact;
pub mod error;
pub mod ledger;
pub mod pagination;
pub mod reporting;
pub mod roles;
pub mod types;
pub mod validation;
