use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use super::jwt_config::JwtConfig;
use crate::auth::application::domain::AdminIdentity;
use crate::auth::application::ports::outgoing::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, admin: &AdminIdentity) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: admin.id,
            email: admin.email.clone(),
            iss: self.config.issuer.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        Ok(IssuedToken {
            token: self.sign(&claims)?,
            expires_at: claims.expires_at(),
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "portfolio".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("FAKE_JWT_SECRET_DO_NOT_USE_0123456789"))
    }

    fn admin() -> AdminIdentity {
        AdminIdentity {
            id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service();
        let admin = admin();

        let issued = service.generate_access_token(&admin).unwrap();
        let claims = service.verify_token(&issued.token).unwrap();

        assert_eq!(claims.identity(), admin);
        assert_eq!(claims.iss, "portfolio");
        assert_eq!(claims.expires_at(), issued.expires_at);
        assert!(issued.expires_at > Utc::now());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let other = JwtTokenService::new(config("ANOTHER_SECRET_DO_NOT_USE_0123456789"));
        let issued = other.generate_access_token(&admin()).unwrap();

        assert_eq!(
            service().verify_token(&issued.token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let past = Utc::now() - Duration::hours(2);
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            iss: "portfolio".to_string(),
            exp: (past + Duration::minutes(5)).timestamp(),
            iat: past.timestamp(),
            nbf: past.timestamp(),
        };
        let token = service.sign(&claims).unwrap();

        assert_eq!(service.verify_token(&token), Err(TokenError::TokenExpired));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

        let service = service();
        let issued = service.generate_access_token(&admin()).unwrap();
        let parts: Vec<&str> = issued.token.split('.').collect();

        let mut claims: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
        claims["email"] = "intruder@example.com".into();
        let forged_payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(
            service.verify_token(&forged),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            service().verify_token("not.a.jwt"),
            Err(TokenError::MalformedToken)
        );
    }
}
