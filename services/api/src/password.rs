//! Password hashing service
//!
//! Argon2id hashing and verification for stored credentials, plus the
//! legacy-plaintext detection used by the password migration endpoint.

use anyhow::Result;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};

/// Scheme marker carried by every hashed credential (PHC string prefix)
const HASH_PREFIX: &str = "$argon2";

/// Hashing cost configuration
#[derive(Debug, Clone)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashingConfig {
    /// Create a HashingConfig from environment variables
    ///
    /// # Environment Variables
    /// - `HASH_MEMORY_KIB`: Memory cost in KiB (default: 19456)
    /// - `HASH_ITERATIONS`: Number of iterations (default: 2)
    /// - `HASH_PARALLELISM`: Degree of parallelism (default: 1)
    pub fn from_env() -> Self {
        let memory_kib = std::env::var("HASH_MEMORY_KIB")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Params::DEFAULT_M_COST);

        let iterations = std::env::var("HASH_ITERATIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Params::DEFAULT_T_COST);

        let parallelism = std::env::var("HASH_PARALLELISM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Params::DEFAULT_P_COST);

        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }
}

/// Password hashing service
#[derive(Clone)]
pub struct PasswordService {
    params: Params,
}

impl PasswordService {
    /// Create a new password service with the given cost configuration
    pub fn new(config: &HashingConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid hashing parameters: {}", e))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password into a salted PHC-string credential
    ///
    /// The salt is random, so hashing the same input twice produces
    /// different credentials.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored credential
    ///
    /// Fails closed: a malformed credential verifies as false instead of
    /// surfacing an error.
    pub fn verify(&self, plaintext: &str, credential: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(credential) else {
            return false;
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    /// Whether a stored value is already a hashed credential
    ///
    /// Used by the migration path to leave already-hashed rows untouched.
    pub fn is_hashed(value: &str) -> bool {
        value.starts_with(HASH_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::new(&HashingConfig::default()).unwrap()
    }

    #[test]
    fn test_hash_round_trip() {
        let service = service();
        let credential = service.hash("s3cret").unwrap();

        assert_ne!(credential, "s3cret");
        assert!(service.verify("s3cret", &credential));
        assert!(!service.verify("wrong", &credential));
    }

    #[test]
    fn test_hash_is_salted() {
        let service = service();
        let first = service.hash("s3cret").unwrap();
        let second = service.hash("s3cret").unwrap();

        assert_ne!(first, second);
        assert!(service.verify("s3cret", &first));
        assert!(service.verify("s3cret", &second));
    }

    #[test]
    fn test_verify_fails_closed_on_malformed_credential() {
        let service = service();

        assert!(!service.verify("s3cret", "not-a-phc-string"));
        assert!(!service.verify("s3cret", ""));
        assert!(!service.verify("s3cret", "$argon2id$garbage"));
    }

    #[test]
    fn test_is_hashed_detects_credentials() {
        let service = service();
        let credential = service.hash("s3cret").unwrap();

        assert!(PasswordService::is_hashed(&credential));
        assert!(!PasswordService::is_hashed("s3cret"));
        assert!(!PasswordService::is_hashed("hunter2"));
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let config = HashingConfig {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };

        assert!(PasswordService::new(&config).is_err());
    }
}
