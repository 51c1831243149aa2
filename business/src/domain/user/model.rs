use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Stored password digest. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sign-up data after validation and normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub profile_picture_url: String,
}

impl Registration {
    /// Validates raw sign-up fields. The password is only checked for length here;
    /// hashing happens in the use case.
    pub fn validate(
        name: &str,
        email: &str,
        password: &str,
        profile_picture_url: Option<&str>,
    ) -> Result<Self, UserError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(UserError::NameTooShort);
        }

        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(UserError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort);
        }

        let profile_picture_url = match profile_picture_url.map(str::trim) {
            Some(raw) if !raw.is_empty() => url::Url::parse(raw)
                .map(|url| url.to_string())
                .map_err(|_| UserError::InvalidProfilePictureUrl)?,
            _ => gravatar_url(&email),
        };

        Ok(Self {
            name: name.to_string(),
            email,
            profile_picture_url,
        })
    }
}

impl User {
    pub fn new(registration: Registration, password_hash: PasswordHash) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            name: registration.name,
            email: registration.email,
            password_hash,
            profile_picture_url: registration.profile_picture_url,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Default avatar for users that did not pick a picture.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(normalize_email(email).as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?d=mp", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_email_and_default_picture() {
        let registration =
            Registration::validate(" Ada ", " Ada@Example.COM ", "correct-horse", None).unwrap();

        assert_eq!(registration.name, "Ada");
        assert_eq!(registration.email, "ada@example.com");
        assert!(
            registration
                .profile_picture_url
                .starts_with("https://www.gravatar.com/avatar/")
        );
        assert!(registration.profile_picture_url.ends_with("?d=mp"));
    }

    #[test]
    fn should_derive_gravatar_from_sha256_of_email() {
        // sha256("test@example.com")
        assert_eq!(
            gravatar_url("  TEST@example.com"),
            "https://www.gravatar.com/avatar/973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b?d=mp"
        );
    }

    #[test]
    fn should_keep_explicit_picture_url() {
        let registration = Registration::validate(
            "Grace",
            "grace@example.com",
            "password123",
            Some("https://cdn.example.com/grace.png"),
        )
        .unwrap();

        assert_eq!(
            registration.profile_picture_url,
            "https://cdn.example.com/grace.png"
        );
    }

    #[test]
    fn should_reject_invalid_fields() {
        assert!(matches!(
            Registration::validate("Al", "al@example.com", "password123", None),
            Err(UserError::NameTooShort)
        ));
        assert!(matches!(
            Registration::validate("Alan", "not-an-email", "password123", None),
            Err(UserError::InvalidEmail)
        ));
        assert!(matches!(
            Registration::validate("Alan", "alan@example.com", "short", None),
            Err(UserError::PasswordTooShort)
        ));
        assert!(matches!(
            Registration::validate("Alan", "alan@example.com", "password123", Some("not a url")),
            Err(UserError::InvalidProfilePictureUrl)
        ));
    }

    #[test]
    fn should_redact_password_hash_in_debug_output() {
        let hash = PasswordHash::new("$argon2id$secret".to_string());

        assert!(!format!("{:?}", hash).contains("secret"));
    }
}
