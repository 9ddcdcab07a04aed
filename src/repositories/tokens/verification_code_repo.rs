use std::sync::Arc;
use async_trait::async_trait;
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppResult,
    core::registry::Repository,
    repositories::stores::VerificationCodeStore,
};

#[repository(name = "verificationcode", collection = "verification_codes")]
pub struct VerificationCodeRepository {
    redis: Arc<RedisClient>,
}

fn code_key(email: &str) -> String {
    format!("verification:code:{}", email.to_lowercase())
}

fn verified_key(email: &str) -> String {
    format!("verification:verified:{}", email.to_lowercase())
}

#[async_trait]
impl VerificationCodeStore for VerificationCodeRepository {
    async fn save_code(&self, email: &str, code: &str, ttl_seconds: u64) -> AppResult<()> {
        self.redis.set_with_expiry(&code_key(email), &code, ttl_seconds).await?;
        Ok(())
    }

    async fn find_code(&self, email: &str) -> AppResult<Option<String>> {
        Ok(self.redis.get::<String>(&code_key(email)).await?)
    }

    async fn delete_code(&self, email: &str) -> AppResult<()> {
        self.redis.del(&code_key(email)).await?;
        Ok(())
    }

    async fn mark_verified(&self, email: &str, ttl_seconds: u64) -> AppResult<()> {
        self.redis.set_with_expiry(&verified_key(email), &true, ttl_seconds).await?;
        Ok(())
    }

    async fn is_verified(&self, email: &str) -> AppResult<bool> {
        Ok(self.redis.exists(&verified_key(email)).await?)
    }

    async fn clear_verified(&self, email: &str) -> AppResult<()> {
        self.redis.del(&verified_key(email)).await?;
        Ok(())
    }
}
