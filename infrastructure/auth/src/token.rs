use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::UserError;
use business::domain::user::services::TokenService;

/// Signing parameters for session tokens.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub expires_in: Duration,
    pub algorithm: Algorithm,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// HMAC-signed JWTs whose subject is the user id.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
    algorithm: Algorithm,
}

impl JwtTokenService {
    pub fn new(settings: JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            expires_in: settings.expires_in,
            algorithm: settings.algorithm,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId) -> Result<String, UserError> {
        let now = Utc::now();
        let Some(expires_at) = now.checked_add_signed(self.expires_in) else {
            tracing::error!("Token lifetime {} overflows the clock", self.expires_in);
            return Err(UserError::TokenIssueFailed);
        };
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Token signing failed: {e}");
            UserError::TokenIssueFailed
        })
    }

    fn verify(&self, token: &str) -> Option<UserId> {
        let validation = Validation::new(self.algorithm);

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data.claims.sub.parse().ok(),
            Err(e) => {
                tracing::debug!("Rejected session token: {e}");
                None
            }
        }
    }
}
