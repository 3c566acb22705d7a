//! Password credential derivation and verification.
//!
//! A stored credential is one opaque string: a 64-character hex salt followed
//! by the hex-encoded PBKDF2-HMAC-SHA512 derived key. Only [`hash`] produces
//! the format and only [`verify`] consumes it; both depend on the fixed
//! 64-character salt prefix.

use anyhow::{bail, Context, Result};
use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256, Sha512};

/// PBKDF2 iteration count
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Bytes of OS randomness fed into the salt digest
const SALT_ENTROPY_BYTES: usize = 60;

/// Length of the hex salt prefix in a stored credential
const SALT_HEX_LEN: usize = 64;

/// Length of the hex-encoded derived key (SHA-512 output)
const KEY_HEX_LEN: usize = 128;

/// Derive a credential string from a password
///
/// # Errors
/// Returns an error if the OS random source fails
pub fn hash(password: &str) -> Result<String> {
    let mut entropy = [0u8; SALT_ENTROPY_BYTES];
    OsRng
        .try_fill_bytes(&mut entropy)
        .context("failed to generate salt entropy")?;

    // Salt is the hex digest of the entropy, 64 ASCII characters
    let salt = hex::encode(Sha256::digest(entropy));

    let mut key = [0u8; 64];
    pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );

    Ok(format!("{salt}{}", hex::encode(key)))
}

/// Check a password against a stored credential
///
/// # Errors
/// Returns an error if the stored credential is malformed
pub fn verify(credential: &str, password: &str) -> Result<bool> {
    if credential.len() != SALT_HEX_LEN + KEY_HEX_LEN || !credential.is_ascii() {
        bail!("malformed stored credential");
    }

    let (salt, expected) = credential.split_at(SALT_HEX_LEN);

    let mut key = [0u8; 64];
    pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );

    Ok(constant_time_eq(
        hex::encode(key).as_bytes(),
        expected.as_bytes(),
    ))
}

/// Constant-time byte comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() -> Result<()> {
        let credential = hash("CorrectHorseBatteryStaple")?;
        assert!(verify(&credential, "CorrectHorseBatteryStaple")?);
        Ok(())
    }

    #[test]
    fn test_verify_rejects_wrong_password() -> Result<()> {
        let credential = hash("CorrectHorseBatteryStaple")?;
        assert!(!verify(&credential, "wrong")?);
        assert!(!verify(&credential, "correcthorsebatterystaple")?);
        assert!(!verify(&credential, "")?);
        Ok(())
    }

    #[test]
    fn test_hash_is_salted() -> Result<()> {
        let one = hash("pw")?;
        let two = hash("pw")?;
        assert_ne!(one, two);
        assert_ne!(one[..SALT_HEX_LEN], two[..SALT_HEX_LEN]);
        Ok(())
    }

    #[test]
    fn test_credential_format() -> Result<()> {
        let credential = hash("pw")?;
        assert_eq!(credential.len(), SALT_HEX_LEN + KEY_HEX_LEN);
        assert!(credential.chars().all(|c| c.is_ascii_hexdigit()));
        Ok(())
    }

    #[test]
    fn test_verify_malformed_credential_is_error() {
        assert!(verify("", "pw").is_err());
        assert!(verify("deadbeef", "pw").is_err());
        // one char short of a full credential
        let short = "a".repeat(SALT_HEX_LEN + KEY_HEX_LEN - 1);
        assert!(verify(&short, "pw").is_err());
    }

    #[test]
    fn test_verify_tampered_credential() -> Result<()> {
        let credential = hash("pw")?;
        let mut tampered = credential.into_bytes();
        let last = tampered.last_mut().expect("non-empty credential");
        *last = if *last == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(tampered).expect("ascii credential");
        assert!(!verify(&tampered, "pw")?);
        Ok(())
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
    }
}
