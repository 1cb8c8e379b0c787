//! Salted password digests.

use super::AccountDomainError;
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

const ALGORITHM: &str = "sha256";
const ROUNDS: u32 = 4096;
const DIGEST_HEX_LENGTH: usize = 64;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Stretched, salted SHA-256 password digest.
///
/// Encoded for storage as `sha256$<salt>$<hex digest>`.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: String,
    digest: String,
}

impl PasswordHash {
    /// Hashes a plain-text password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::PasswordTooShort`] when the password has
    /// fewer than [`MIN_PASSWORD_LENGTH`] characters.
    pub fn create(password: &str) -> Result<Self, AccountDomainError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountDomainError::PasswordTooShort {
                min_length: MIN_PASSWORD_LENGTH,
            });
        }
        let salt = Uuid::new_v4().simple().to_string();
        let digest = stretch(&salt, password);
        Ok(Self { salt, digest })
    }

    /// Parses a stored `sha256$<salt>$<digest>` value.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::MalformedPasswordHash`] when the value
    /// does not follow the storage format.
    pub fn parse(encoded: &str) -> Result<Self, AccountDomainError> {
        let mut parts = encoded.split('$');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(ALGORITHM), Some(salt), Some(digest), None)
                if !salt.is_empty()
                    && digest.len() == DIGEST_HEX_LENGTH
                    && digest.chars().all(|c| c.is_ascii_hexdigit()) =>
            {
                Ok(Self {
                    salt: salt.to_owned(),
                    digest: digest.to_ascii_lowercase(),
                })
            }
            _ => Err(AccountDomainError::MalformedPasswordHash),
        }
    }

    /// Returns the storage encoding.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{ALGORITHM}${}${}", self.salt, self.digest)
    }

    /// Returns `true` when `password` produces this digest.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        let candidate = stretch(&self.salt, password);
        constant_time_eq(candidate.as_bytes(), self.digest.as_bytes())
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}

fn stretch(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let mut digest = hasher.finalize();

    for _ in 1..ROUNDS {
        let mut round = Sha256::new();
        round.update(digest);
        round.update(password.as_bytes());
        digest = round.finalize();
    }

    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
