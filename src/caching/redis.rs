use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::RedisConfig;

/// 멀티플렉스 비동기 연결을 사용하는 Redis 클라이언트
///
/// 값은 모두 JSON 문자열로 저장됩니다.
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

fn serialization_error(e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
}

impl RedisClient {
    /// 연결 후 `PING`으로 도달 가능 여부를 확인합니다.
    pub async fn new(config: &RedisConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(config.url.as_str())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string()))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// `SET key value EX seconds`
    ///
    /// `seconds`가 0이면 이미 만료된 값으로 보고 기존 키를 지우기만 합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        if seconds == 0 {
            self.del(key).await?;
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(serialization_error)?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.exists(key).await
    }

    /// 키를 삭제하고 실제로 지워졌는지 반환합니다.
    pub async fn del(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let removed: u64 = conn.del(key).await?;
        Ok(removed > 0)
    }

    /// 여러 키를 한 번에 삭제합니다. 빈 목록이면 연결하지 않습니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// `KEYS pattern` (운영 환경에서는 키 수가 적은 네임스페이스에만 사용)
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}
