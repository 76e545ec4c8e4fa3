//! JWT token validation.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use mondio_core::config::auth::AuthConfig;
use mondio_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use mondio_entity::user::User;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_hours: 1,
            password_min_length: 8,
        }
    }

    fn test_user(is_trainer: bool) -> User {
        User {
            id: Uuid::new_v4(),
            email: "handler@example.com".to_string(),
            password_hash: String::new(),
            photo_url: None,
            is_trainer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user = test_user(true);
        let issued = encoder.generate_token(&user).unwrap();
        let claims = decoder.decode_token(&issued.token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert!(claims.is_trainer);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let issued = encoder.generate_token(&test_user(false)).unwrap();
        assert!(decoder.decode_token(&issued.token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_token("not-a-token").is_err());
    }
}
