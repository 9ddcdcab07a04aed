use std::sync::Arc;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppResult,
    core::registry::Repository,
    domain::models::RefreshToken,
    repositories::stores::RefreshTokenStore,
};

const KEY_PREFIX: &str = "refreshToken";

#[repository(name = "refreshtoken", collection = "refresh_tokens")]
pub struct RefreshTokenRepository {
    redis: Arc<RedisClient>,
}

/// `refreshToken:<sha256 hex>`
pub fn refresh_token_key(refresh_token: &str) -> String {
    format!("{}:{:x}", KEY_PREFIX, Sha256::digest(refresh_token.as_bytes()))
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn save(&self, token: &RefreshToken, ttl_seconds: u64) -> AppResult<()> {
        let key = refresh_token_key(&token.refresh_token);
        self.redis.set_with_expiry(&key, token, ttl_seconds).await?;

        log::debug!("리프레시 토큰 저장 - user_id: {}, ttl: {}s", token.user_id, ttl_seconds);
        Ok(())
    }

    async fn find(&self, refresh_token: &str) -> AppResult<Option<RefreshToken>> {
        Ok(self.redis.get::<RefreshToken>(&refresh_token_key(refresh_token)).await?)
    }

    async fn exists(&self, refresh_token: &str) -> AppResult<bool> {
        Ok(self.redis.exists(&refresh_token_key(refresh_token)).await?)
    }

    async fn delete(&self, refresh_token: &str) -> AppResult<bool> {
        Ok(self.redis.del(&refresh_token_key(refresh_token)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_key_is_hashed() {
        let key = refresh_token_key("eyJhbGciOiJIUzI1NiJ9.payload.signature");

        assert!(key.starts_with("refreshToken:"));
        assert_eq!(key.len(), "refreshToken:".len() + 64);
        assert!(!key.contains("payload"));
    }

    #[test]
    fn test_refresh_token_key_is_stable() {
        assert_eq!(refresh_token_key("abc"), refresh_token_key("abc"));
        assert_ne!(refresh_token_key("abc"), refresh_token_key("abd"));
    }
}
