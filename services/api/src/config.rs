//! Server configuration

use anyhow::Result;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Optional key guarding the password migration endpoint
    pub admin_key: Option<String>,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: HTTP listen port (default: 3000)
    /// - `ADMIN_KEY`: key required by the password migration endpoint;
    ///   when unset the endpoint is open
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let admin_key = std::env::var("ADMIN_KEY").ok().filter(|key| !key.is_empty());

        Ok(ServerConfig { port, admin_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("ADMIN_KEY");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_key, None);
    }

    #[test]
    #[serial]
    fn test_server_config_from_env() {
        unsafe {
            std::env::set_var("PORT", "8080");
            std::env::set_var("ADMIN_KEY", "sekrit");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_key.as_deref(), Some("sekrit"));

        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("ADMIN_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_empty_admin_key_counts_as_unset() {
        unsafe {
            std::env::set_var("ADMIN_KEY", "");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.admin_key, None);

        unsafe {
            std::env::remove_var("ADMIN_KEY");
        }
    }
}
