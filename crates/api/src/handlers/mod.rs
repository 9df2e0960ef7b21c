pub mod agenda;
pub mod auth;
pub mod cases;
pub mod clients;
pub mod contact;
pub mod dashboard;
pub mod transactions;
pub mod users;
