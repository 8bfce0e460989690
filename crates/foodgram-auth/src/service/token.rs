//! JWT token service

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::LazyLock;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use moka::sync::Cache;
use tracing::debug;

use crate::model::JwtPayload;

/// Hash of the verifying secret plus the raw token
type TokenCacheKey = (u64, String);

/// Validated claims, per secret and token
static TOKEN_CACHE: LazyLock<Cache<TokenCacheKey, JwtPayload>> = LazyLock::new(|| {
    Cache::builder()
        .max_capacity(10_000)
        .time_to_live(Duration::from_secs(300))
        .build()
});

/// Decode and validate a JWT token, reusing claims validated recently.
pub fn decode_jwt_token_cached(
    token: &str,
    secret_key: &str,
) -> jsonwebtoken::errors::Result<jsonwebtoken::TokenData<JwtPayload>> {
    let key = cache_key(token, secret_key);

    if let Some(claims) = TOKEN_CACHE.get(&key) {
        if claims.exp > chrono::Utc::now().timestamp() {
            return Ok(jsonwebtoken::TokenData {
                header: Header::new(Algorithm::HS256),
                claims,
            });
        }
        debug!(sub = %claims.sub, "Cached token expired");
        TOKEN_CACHE.invalidate(&key);
    }

    let result = decode_jwt_token(token, secret_key)?;

    TOKEN_CACHE.insert(key, result.claims.clone());

    Ok(result)
}

fn cache_key(token: &str, secret_key: &str) -> TokenCacheKey {
    let mut hasher = DefaultHasher::new();
    secret_key.hash(&mut hasher);
    (hasher.finish(), token.to_string())
}

/// Decode and validate a JWT token without caching
pub fn decode_jwt_token(
    token: &str,
    secret_key: &str,
) -> jsonwebtoken::errors::Result<jsonwebtoken::TokenData<JwtPayload>> {
    let decoding_key = DecodingKey::from_base64_secret(secret_key)?;
    decode::<JwtPayload>(token, &decoding_key, &Validation::new(Algorithm::HS256))
}

/// Encode a JWT token for `sub` that expires after `expire_seconds`.
pub fn encode_jwt_token(
    sub: &str,
    secret_key: &str,
    expire_seconds: i64,
) -> jsonwebtoken::errors::Result<String> {
    let exp = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(expire_seconds))
        .unwrap_or_else(chrono::Utc::now)
        .timestamp();

    let payload = JwtPayload {
        sub: sub.to_string(),
        exp,
    };

    let encoding_key = EncodingKey::from_base64_secret(secret_key)?;
    encode(&Header::new(Algorithm::HS256), &payload, &encoding_key)
}
