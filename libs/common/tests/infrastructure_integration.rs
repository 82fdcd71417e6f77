//! Integration tests for the database infrastructure
//!
//! These tests verify that the users and products databases are properly
//! configured and accessible from the application. Each database is skipped
//! when its connection URL is not present in the environment.

use common::database::{DatabaseConfig, health_check, init_pool};
use sqlx::Row;

#[tokio::test]
async fn test_database_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    for (prefix, database) in [("USERS", "users"), ("PRODUCTS", "products")] {
        if std::env::var(format!("{prefix}_DATABASE_URL")).is_err() {
            eprintln!("{prefix}_DATABASE_URL not set, skipping {database} round trip");
            continue;
        }

        let config = DatabaseConfig::from_env(prefix, database)?;
        let pool = init_pool(&config).await?;

        assert!(
            health_check(&pool).await?,
            "{database} database health check failed"
        );

        let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;
        let result: i32 = row.get("result");
        assert_eq!(result, 1, "{database} simple query test failed");
    }

    Ok(())
}
