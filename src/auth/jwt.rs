//! JWT issue/verify. Tokens carry the user's role so role gates do not
//! need a database round trip.

use crate::error::AppError;
use crate::models::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Expiration (unix seconds).
    pub exp: u64,
    /// Issued at (unix seconds).
    pub iat: u64,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::Unauthorized("invalid subject in token".into()))
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn issue_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    secret: &str,
    ttl_hours: u64,
) -> Result<String, AppError> {
    let iat = now_unix();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp: iat + ttl_hours * 3600,
        iat,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token encode: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_verifies_and_carries_role() {
        let id = Uuid::new_v4();
        let token = issue_token(id, "editor@example.org", Role::Editor, SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.user_id().unwrap(), id);
        assert_eq!(claims.email, "editor@example.org");
        assert_eq!(claims.role, Role::Editor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "a@b.c", Role::Admin, SECRET, 1).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = verify_token("not.a.token", SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
