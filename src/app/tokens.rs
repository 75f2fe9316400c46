use std::time::Duration;

use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::model::{Identity, SessionClaims, SessionToken};

/// Lifetime of a session token issued at login.
pub const SESSION_TTL: Duration = Duration::from_secs(4 * 60 * 60);

/// Signs and verifies HS256 session tokens. Tokens are not persisted and
/// cannot be revoked before they expire.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn issue(&self, identity: &Identity) -> anyhow::Result<SessionToken> {
        let claims = SessionClaims {
            identity: identity.clone(),
            exp: get_current_timestamp() + self.ttl.as_secs(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(SessionToken::new(token))
    }

    /// Returns the identity carried by `token` if its signature is valid and it has not expired.
    pub fn verify(&self, token: &str) -> Option<Identity> {
        match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.identity),
            Err(err) => {
                log::debug!("rejected session token: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn identity() -> Identity {
        Identity {
            id: UserId::from_raw(12),
            email: "a@x.com".to_string(),
            name: "Ana".to_string(),
        }
    }

    #[test]
    fn issued_token_verifies_to_the_same_identity() {
        let issuer = TokenIssuer::new("secreta", SESSION_TTL);

        let token = issuer.issue(&identity()).unwrap();

        assert_eq!(issuer.verify(&token.into_string()), Some(identity()));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = TokenIssuer::new("secreta", SESSION_TTL);
        let forger = TokenIssuer::new("otra", SESSION_TTL);

        let token = forger.issue(&identity()).unwrap();

        assert_eq!(issuer.verify(&token.into_string()), None);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("secreta", SESSION_TTL);
        let claims = SessionClaims {
            identity: identity(),
            exp: get_current_timestamp() - 10,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secreta"),
        )
        .unwrap();

        assert_eq!(issuer.verify(&token), None);
    }

    #[test]
    fn garbage_is_rejected() {
        let issuer = TokenIssuer::new("secreta", SESSION_TTL);

        assert_eq!(issuer.verify("not-a-token"), None);
    }
}
