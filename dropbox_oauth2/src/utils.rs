use ring::rand::SecureRandom;
use thiserror::Error;
use uuid::{Builder, Uuid};

/// Generate a version 4 UUID whose random bits come from the system CSPRNG.
pub(crate) fn gen_random_uuid() -> Result<Uuid, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random bytes".to_string()))?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}

/// Mask a credential for logging, keeping only a short prefix.
pub(crate) fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),
}
