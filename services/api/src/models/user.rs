//! User models and related payloads
//!
//! The stored credential only ever appears on the non-serializable row
//! types (`AuthUser`, `CredentialRow`); everything that can reach a
//! response body carries no password field at all.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public user record, as returned by the read endpoints
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub full_name: String,
    pub nick_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// User row selected for authentication, including the stored credential
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub full_name: String,
    pub nick_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Slice of an authenticated user that is safe to return to the client
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub full_name: String,
    pub nick_name: Option<String>,
    pub email: String,
}

impl From<AuthUser> for PublicUser {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            nick_name: user.nick_name,
            email: user.email,
        }
    }
}

/// Row returned by a successful registration insert
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUser {
    pub id: i32,
    pub full_name: String,
    pub nick_name: Option<String>,
    pub email: String,
}

/// Validated registration input, ready for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub nick_name: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// id/credential pair scanned by the password migration
#[derive(Debug, Clone)]
pub struct CredentialRow {
    pub id: i32,
    pub password: String,
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request for user registration
///
/// Required fields are still optional here; presence is checked by
/// `validation::validate_registration` so that missing fields produce a
/// 400 with a message naming them, not a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub nick_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Request for the admin password migration
#[derive(Debug, Deserialize)]
pub struct RehashRequest {
    #[serde(rename = "adminKey")]
    pub admin_key: Option<String>,
}
