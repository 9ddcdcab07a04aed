//! 캐싱 계층 모듈
//!
//! Redis를 키-값 저장소로 사용합니다. 리프레시 토큰과 이메일 인증 코드처럼
//! TTL이 있는 단기 데이터를 JSON으로 직렬화해 보관합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use link_backend::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new(&RedisConfig::from_env()).await?;
//! cache.set_with_expiry("verification:code:a@b.com", &"123456", 300).await?;
//! let exists = cache.exists("verification:code:a@b.com").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
