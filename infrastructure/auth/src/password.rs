use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};

use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id with the crate's default parameters and a random salt per hash.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Password hashing failed: {e}");
                UserError::PasswordHashingFailed
            })
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is unreadable: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_password_against_its_hash() {
        let hasher = Argon2PasswordHasher::new();

        let hash = hasher.hash("open sesame").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("open sesame", &hash));
        assert!(!hasher.verify("open sesame!", &hash));
    }

    #[test]
    fn should_salt_every_hash() {
        let hasher = Argon2PasswordHasher::new();

        assert_ne!(
            hasher.hash("same password").unwrap(),
            hasher.hash("same password").unwrap()
        );
    }

    #[test]
    fn should_reject_garbage_hash() {
        let hasher = Argon2PasswordHasher::new();

        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }
}
