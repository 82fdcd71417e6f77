//! Request validation for the registration flow
//!
//! Only presence of the required fields is enforced. Email shape and
//! password strength are deliberately not checked.

use crate::models::{NewUser, RegisterRequest};

/// Validate a registration payload, returning the insertable input
///
/// A required field that is absent or blank counts as missing; the error
/// message names every missing field.
pub fn validate_registration(payload: &RegisterRequest) -> Result<NewUser, String> {
    let full_name = present(&payload.full_name);
    let email = present(&payload.email);
    let password = present(&payload.password);

    if let (Some(full_name), Some(email), Some(password)) = (full_name, email, password) {
        return Ok(NewUser {
            full_name: full_name.to_string(),
            nick_name: present(&payload.nick_name).map(str::to_string),
            email: email.to_string(),
            password: password.to_string(),
            phone: present(&payload.phone).map(str::to_string),
            address: present(&payload.address).map(str::to_string),
            birthday: payload.birthday,
        });
    }

    let mut missing = Vec::new();
    if full_name.is_none() {
        missing.push("full_name");
    }
    if email.is_none() {
        missing.push("email");
    }
    if password.is_none() {
        missing.push("password");
    }

    Err(format!("Missing required fields: {}", missing.join(", ")))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
