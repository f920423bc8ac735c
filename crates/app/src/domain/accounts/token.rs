//! Auth token generation and format checks, plus password hashing.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// Auth token prefix.
pub const AUTH_TOKEN_PREFIX: &str = "lf";

/// Number of random bytes encoded in a token.
pub const AUTH_TOKEN_SECRET_BYTES: usize = 32;

const AUTH_TOKEN_SECRET_HEX_CHARS: usize = AUTH_TOKEN_SECRET_BYTES * 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthTokenError {
    #[error("auth token format is invalid")]
    InvalidFormat,

    #[error("auth token secret encoding is invalid")]
    InvalidSecretEncoding,
}

struct AuthTokenSecret {
    bytes: [u8; AUTH_TOKEN_SECRET_BYTES],
}

impl Drop for AuthTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Generate a fresh random token, e.g. `lf_3f9a...`.
#[must_use]
pub fn generate_auth_token() -> String {
    let mut secret = AuthTokenSecret {
        bytes: [0_u8; AUTH_TOKEN_SECRET_BYTES],
    };

    OsRng.fill_bytes(&mut secret.bytes);

    format!("{AUTH_TOKEN_PREFIX}_{}", encode_hex(&secret.bytes))
}

/// Reject tokens that could never have been issued, before touching storage.
///
/// # Errors
///
/// Returns an error when the prefix or secret encoding is wrong.
pub fn check_auth_token_format(token: &str) -> Result<(), AuthTokenError> {
    let (prefix, secret_hex) = token.split_once('_').ok_or(AuthTokenError::InvalidFormat)?;

    if prefix != AUTH_TOKEN_PREFIX {
        return Err(AuthTokenError::InvalidFormat);
    }

    if secret_hex.len() != AUTH_TOKEN_SECRET_HEX_CHARS {
        return Err(AuthTokenError::InvalidSecretEncoding);
    }

    if !secret_hex
        .bytes()
        .all(|byte| byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte))
    {
        return Err(AuthTokenError::InvalidSecretEncoding);
    }

    Ok(())
}

/// Lowercase hex SHA-256 of a password, as stored in `accounts.password_hash`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(char::from(HEX[usize::from(byte >> 4)]));
        encoded.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }

    encoded
}
