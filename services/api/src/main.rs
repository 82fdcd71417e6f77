use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod config;
mod envelope;
mod error;
mod models;
mod password;
mod repositories;
mod routes;
mod state;
mod validation;

use common::database::{DatabaseConfig, health_check, init_pool};
use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    password::{HashingConfig, PasswordService},
    repositories::{ProductRepository, UserRepository},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting store API service");

    let server_config = ServerConfig::from_env()?;

    // One connection pool per logical database
    let users_config = DatabaseConfig::from_env("USERS", "users")?;
    let users_pool = init_pool(&users_config).await?;
    if health_check(&users_pool).await? {
        info!("Connected to database: users");
    } else {
        anyhow::bail!("Failed to connect to users database");
    }

    let products_config = DatabaseConfig::from_env("PRODUCTS", "products")?;
    let products_pool = init_pool(&products_config).await?;
    if health_check(&products_pool).await? {
        info!("Connected to database: products");
    } else {
        anyhow::bail!("Failed to connect to products database");
    }

    let password_service = PasswordService::new(&HashingConfig::from_env())?;

    let app_state = AppState {
        user_repository: UserRepository::new(users_pool),
        product_repository: ProductRepository::new(products_pool),
        password_service,
        admin_key: server_config.admin_key.clone(),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Store API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
