//! Well-known role name constants.
//!
//! These must match the CHECK constraint in
//! `20260301000003_create_ad_users_table.sql`.

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_ADMIN: &str = "admin";

/// Every role a user row may carry.
pub const VALID_ROLES: &[&str] = &[ROLE_MEMBER, ROLE_MODERATOR, ROLE_ADMIN];

/// Whether `role` names one of the known roles.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role("member"));
        assert!(is_valid_role("moderator"));
        assert!(is_valid_role("admin"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("Member"));
    }
}
