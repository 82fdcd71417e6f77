//! API models for request, response, and row payloads

pub mod product;
pub mod user;

// Re-export for convenience
pub use product::Product;
pub use user::{
    AuthUser, CreatedUser, CredentialRow, LoginRequest, NewUser, PublicUser, RegisterRequest,
    RehashRequest, UserRecord,
};
