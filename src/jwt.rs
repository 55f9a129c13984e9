use crate::error::{self, Result};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

const DEFAULT_EXPIRATION_SECS: i64 = 12 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation.leeway = 5;

    validation
});

pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration: i64,
}

impl Jwt {
    pub fn new(secret: &[u8], expiration: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            expiration,
        }
    }

    /// Reads `JWT_SECRET` and the optional `JWT_EXPIRATION_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").inspect_err(|_| error!("JWT_SECRET is not set"))?;

        let expiration = match env::var("JWT_EXPIRATION_SECS") {
            Ok(value) => value
                .parse()
                .inspect_err(|_| error!("JWT_EXPIRATION_SECS is not a number"))?,
            Err(_) => DEFAULT_EXPIRATION_SECS,
        };

        Ok(Self::new(secret.as_bytes(), expiration))
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.expiration,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |error| {
                error!("failed to issue token: {error}");
                error::INTERNAL
            },
        )
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(error = error.to_string(), "tried invalid token");
                Err(error::JWT_INVALID_TOKEN)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_carries_subject() {
        let jwt = Jwt::new(b"secret", 60);
        let id = Uuid::now_v7();

        let token = jwt.issue(id).unwrap();
        let claims = jwt.get_claims(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = Jwt::new(b"secret", 60).issue(Uuid::now_v7()).unwrap();
        let result = Jwt::new(b"other", 60).get_claims(&token);

        assert_eq!(result.unwrap_err().code(), error::JWT_INVALID_TOKEN.code());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = Jwt::new(b"secret", -3600);
        let token = jwt.issue(Uuid::now_v7()).unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }
}
