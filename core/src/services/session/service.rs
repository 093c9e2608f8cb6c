//! Main session token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::session::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::SessionError;

use super::config::SessionServiceConfig;

/// Service for issuing and validating session tokens
pub struct SessionService {
    config: SessionServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionService {
    /// Creates a new session service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Session service configuration
    pub fn new(config: SessionServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Lifetime of issued tokens in seconds
    pub fn token_expiry_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }

    /// Issues a signed session token for an account
    ///
    /// # Arguments
    ///
    /// * `account_id` - The authenticated account
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(SessionError)` - Signing failed
    pub fn issue(&self, account_id: Uuid) -> Result<String, SessionError> {
        let claims = Claims::new(account_id, self.config.token_expiry_seconds);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::TokenGeneration(e.to_string()))
    }

    /// Validates a session token and returns its claims
    ///
    /// Checks the signature, issuer, audience, expiry, and not-before
    /// fields in one pass.
    ///
    /// # Arguments
    ///
    /// * `token` - The encoded JWT from the cookie
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The validated claims
    /// * `Err(SessionError::TokenExpired)` - Signature valid but past expiry
    /// * `Err(SessionError::InvalidToken)` - Any other validation failure
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::TokenExpired,
                _ => SessionError::InvalidToken,
            })
    }
}
