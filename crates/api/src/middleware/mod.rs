//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the session cookie to the calling user.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
