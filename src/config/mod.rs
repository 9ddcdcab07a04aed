//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 타입으로 묶어 제공합니다.
//! 설정 구조체는 기동 시 한 번 만들어 서비스 생성자에 넘깁니다.
//! 요청 처리 중에 환경 변수를 다시 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, Redis, Rate Limit, 환경 설정
//! - [`auth_config`] - 토큰, 비밀번호, 이메일 인증 코드 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="link_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 토큰 (초 단위)
//! export JWT_SECRET="your-super-secret-key"
//! export ACCESS_TOKEN_EXPIRE_TIME="1800"
//! export REFRESH_TOKEN_EXPIRE_TIME="1209600"
//!
//! # 이메일 인증 (초 단위)
//! export VERIFICATION_CODE_TTL="300"
//! export VERIFIED_EMAIL_TTL="1800"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::env;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패: {:?}. 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
