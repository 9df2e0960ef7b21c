//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_LAWYER: &str = "lawyer";

/// Role assigned to new users when none is given.
pub const DEFAULT_ROLE: &str = ROLE_LAWYER;

/// Set of valid role strings.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_LAWYER];

/// Returns `true` if the given role string is valid.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}
