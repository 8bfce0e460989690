//! Authentication models and header constants

use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use foodgram_common::FoodgramError;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const ACCESS_TOKEN: &str = "accessToken";
pub const TOKEN_PREFIX: &str = "Bearer ";
/// Prefix used by DRF-style token clients
pub const LEGACY_TOKEN_PREFIX: &str = "Token ";

pub const TOKEN_SECRET_KEY: &str = "foodgram.auth.token.secret.key";
pub const TOKEN_EXPIRE_SECONDS: &str = "foodgram.auth.token.expire.seconds";
pub const DEFAULT_TOKEN_EXPIRE_SECONDS: i64 = 18000;

/// JWT claims issued to a Foodgram user. `sub` carries the user id.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtPayload {
    pub sub: String,
    pub exp: i64,
}

/// Auth context passed through request extensions
#[derive(Debug, Default, Clone)]
pub struct AuthContext {
    pub subject: String,
    pub jwt_error: Option<jsonwebtoken::errors::Error>,
    pub token_provided: bool,
}

impl AuthContext {
    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            jwt_error: None,
            token_provided: true,
        }
    }

    pub fn jwt_error_string(&self) -> String {
        if let Some(e) = &self.jwt_error {
            match e.kind() {
                ErrorKind::ExpiredSignature => "token expired!".to_string(),
                _ => e.to_string(),
            }
        } else {
            String::default()
        }
    }

    /// Resolve the authenticated user id, or explain why there is none.
    pub fn user_id(&self) -> Result<i32, FoodgramError> {
        if !self.token_provided {
            return Err(FoodgramError::Unauthorized(
                "authentication credentials were not provided".to_string(),
            ));
        }
        if self.jwt_error.is_some() {
            return Err(FoodgramError::Unauthorized(self.jwt_error_string()));
        }

        self.subject.parse::<i32>().map_err(|_| {
            FoodgramError::Unauthorized(format!("invalid token subject: {}", self.subject))
        })
    }
}
