//! Product model

use serde::Serialize;

/// Catalog product row, read-only from this service's perspective
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}
