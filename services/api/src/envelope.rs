//! Shared response envelope for all API routes
//!
//! Every data route answers with a body carrying a boolean `success`.
//! Successful reads echo the dataset name and wrap the rows in `data`;
//! writes acknowledge with a short `message`. Failure bodies are built by
//! `error::ApiError`.

use serde::Serialize;

/// Envelope for list responses
#[derive(Debug, Serialize)]
pub struct Collection<T> {
    pub success: bool,
    pub database: &'static str,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new(database: &'static str, data: Vec<T>) -> Self {
        Self {
            success: true,
            database,
            count: data.len(),
            data,
        }
    }
}

/// Envelope for single-row responses
#[derive(Debug, Serialize)]
pub struct Single<T> {
    pub success: bool,
    pub database: &'static str,
    pub data: T,
}

impl<T> Single<T> {
    pub fn new(database: &'static str, data: T) -> Self {
        Self {
            success: true,
            database,
            data,
        }
    }
}

/// Envelope acknowledging a write
#[derive(Debug, Serialize)]
pub struct Ack<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T> Ack<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

/// Summary returned by the password migration endpoint
#[derive(Debug, Serialize)]
pub struct MigrationSummary {
    pub success: bool,
    pub message: &'static str,
    pub total: usize,
    pub updated: usize,
}

impl MigrationSummary {
    pub fn new(total: usize, updated: usize) -> Self {
        Self {
            success: true,
            message: "Password migration complete",
            total,
            updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_envelope_shape() {
        let envelope = Collection::new("users", vec![json!({"id": 1}), json!({"id": 2})]);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["database"], json!("users"));
        assert_eq!(value["count"], json!(2));
        assert_eq!(value["data"], json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn test_single_envelope_shape() {
        let envelope = Single::new("products", json!({"id": 7}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["database"], json!("products"));
        assert_eq!(value["data"]["id"], json!(7));
        assert!(value.get("count").is_none());
    }

    #[test]
    fn test_migration_summary_shape() {
        let value = serde_json::to_value(MigrationSummary::new(12, 3)).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["total"], json!(12));
        assert_eq!(value["updated"], json!(3));
    }
}
