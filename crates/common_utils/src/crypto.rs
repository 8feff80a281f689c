//! Utilities for cryptographic randomness

use error_stack::ResultExt;
use ring::rand::{SecureRandom, SystemRandom};

use crate::errors::{self, CustomResult};

/// Fill a buffer of `length` bytes from the system's secure random source.
pub fn generate_cryptographically_secure_random_bytes(
    length: usize,
) -> CustomResult<Vec<u8>, errors::CryptoError> {
    let rng = SystemRandom::new();
    let mut bytes = vec![0_u8; length];
    rng.fill(&mut bytes)
        .map_err(|_| errors::CryptoError::RandomGenerationFailed)
        .attach_printable("Unable to fill buffer from the system random source")?;

    Ok(bytes)
}

/// Generate a single-use nonce of [`crate::consts::NONCE_LENGTH`] random bytes, hex encoded.
///
/// A fresh value is drawn on every call; nonces are never cached.
pub fn generate_nonce() -> CustomResult<String, errors::CryptoError> {
    generate_cryptographically_secure_random_bytes(crate::consts::NONCE_LENGTH).map(hex::encode)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn nonce_is_32_hex_chars() {
        let nonce = generate_nonce().unwrap();
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn nonces_differ() {
        assert_ne!(generate_nonce().unwrap(), generate_nonce().unwrap());
    }
}
