//! Field-constraint validation for update payloads.
//!
//! Update endpoints validate the full replacement payload before touching
//! the store and answer 422 with a field→messages map on failure. Create
//! endpoints skip this layer; schema constraints are the only guard there.

use std::collections::BTreeMap;

use crate::roles::{is_valid_role, VALID_ROLES};

/// Field name → list of violation messages, serialized verbatim as the
/// 422 response body.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const CATEGORY_NAME_MAX: usize = 20;
pub const AD_NAME_MAX: usize = 20;
pub const AD_DESCRIPTION_MAX: usize = 1000;
pub const LOCATION_NAME_MAX: usize = 200;
pub const FIRST_NAME_MAX: usize = 20;
pub const LAST_NAME_MAX: usize = 20;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MAX: usize = 30;

fn check_max_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors
            .entry(field.to_string())
            .or_default()
            .push(format!("must be at most {max} characters (got {len})"));
    }
}

pub fn validate_category_update(name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_max_length(&mut errors, "name", name, CATEGORY_NAME_MAX);
    errors
}

pub fn validate_ad_update(name: &str, price: i64, description: Option<&str>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_max_length(&mut errors, "name", name, AD_NAME_MAX);
    if price < 0 {
        errors
            .entry("price".to_string())
            .or_default()
            .push("must not be negative".to_string());
    }
    if let Some(description) = description {
        check_max_length(&mut errors, "description", description, AD_DESCRIPTION_MAX);
    }
    errors
}

pub fn validate_ad_user_update(
    first_name: &str,
    last_name: Option<&str>,
    username: &str,
    password: &str,
    role: &str,
    age: i32,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_max_length(&mut errors, "first_name", first_name, FIRST_NAME_MAX);
    if let Some(last_name) = last_name {
        check_max_length(&mut errors, "last_name", last_name, LAST_NAME_MAX);
    }
    check_max_length(&mut errors, "username", username, USERNAME_MAX);
    check_max_length(&mut errors, "password", password, PASSWORD_MAX);
    if !is_valid_role(role) {
        errors.entry("role".to_string()).or_default().push(format!(
            "must be one of: {}",
            VALID_ROLES.join(", ")
        ));
    }
    if age < 0 {
        errors
            .entry("age".to_string())
            .or_default()
            .push("must not be negative".to_string());
    }
    errors
}

pub fn validate_location_update(name: Option<&str>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(name) = name {
        check_max_length(&mut errors, "name", name, LOCATION_NAME_MAX);
    }
    errors
}
