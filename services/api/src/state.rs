//! Application state shared across handlers

use crate::{
    password::PasswordService,
    repositories::{ProductRepository, UserRepository},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub product_repository: ProductRepository,
    pub password_service: PasswordService,
    pub admin_key: Option<String>,
}
