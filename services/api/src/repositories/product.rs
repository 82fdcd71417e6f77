//! Product repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};

use crate::models::Product;

/// Product repository backed by the products database
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products, ordered by id
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let products = rows
            .into_iter()
            .map(|row| Product {
                id: row.get("id"),
                name: row.get("name"),
                description: row.get("description"),
                price: row.get("price"),
                stock: row.get("stock"),
            })
            .collect();

        Ok(products)
    }

    /// Find a product by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let product = Product {
                    id: row.get("id"),
                    name: row.get("name"),
                    description: row.get("description"),
                    price: row.get("price"),
                    stock: row.get("stock"),
                };
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }
}
