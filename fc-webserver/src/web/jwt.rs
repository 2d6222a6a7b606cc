use std::time::Duration;

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fc_core::entities::Id;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id
    sub: String,
    /// Expiry time as Unix timestamp
    exp: u64,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    fn random() -> Self {
        let secret = STANDARD.encode(rand::random::<[u8; 32]>());
        Self::new(secret.as_bytes())
    }
}

/// Issues and validates the HS256 bearer tokens of user sessions.
pub struct JwtState {
    key: Key,
    time_valid: Duration,
}

impl JwtState {
    pub fn new(secret: &[u8], time_valid: Duration) -> Self {
        Self {
            key: Key::new(secret),
            time_valid,
        }
    }

    pub fn random(time_valid: Duration) -> Self {
        Self {
            key: Key::random(),
            time_valid,
        }
    }

    pub fn generate_token(&self, user_id: &Id) -> Result<String> {
        let now = u64::try_from(OffsetDateTime::now_utc().unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.time_valid.as_secs(),
        };
        self.encode(&claims)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<Id> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        let user_id = Id::from(token_data.claims.sub);
        if !user_id.is_valid() {
            return Err(anyhow!("Token without subject"));
        }
        Ok(user_id)
    }

    fn encode(&self, claims: &Claims) -> Result<String> {
        Ok(encode(&Header::default(), claims, &self.key.encoding_key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_DAY: Duration = Duration::from_secs(24 * 60 * 60);

    #[test]
    fn validation_works() {
        let jwt_state = JwtState::random(ONE_DAY);
        let user_id = Id::new();
        let token = jwt_state.generate_token(&user_id).unwrap();
        assert_eq!(user_id, jwt_state.validate_token_and_get_user_id(&token).unwrap());
        assert!(jwt_state.validate_token_and_get_user_id("dubidubidu").is_err());
    }

    #[test]
    fn reject_tokens_of_other_secrets() {
        let issuer = JwtState::new(b"first secret", ONE_DAY);
        let verifier = JwtState::new(b"second secret", ONE_DAY);
        let token = issuer.generate_token(&Id::new()).unwrap();
        assert!(verifier.validate_token_and_get_user_id(&token).is_err());
        assert!(JwtState::new(b"first secret", ONE_DAY)
            .validate_token_and_get_user_id(&token)
            .is_ok());
    }

    #[test]
    fn reject_expired_tokens() {
        let jwt_state = JwtState::random(ONE_DAY);
        let now = OffsetDateTime::now_utc().unix_timestamp() as u64;
        let token = jwt_state
            .encode(&Claims {
                sub: Id::new().to_string(),
                exp: now - 3_600,
            })
            .unwrap();
        assert!(jwt_state.validate_token_and_get_user_id(&token).is_err());
    }
}
