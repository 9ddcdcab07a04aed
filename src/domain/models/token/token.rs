//! 토큰 모델
//!
//! - [`TokenClaims`]: HS256으로 서명되는 JWT 페이로드
//! - [`JwtToken`]: 로그인 응답으로 나가는 액세스/리프레시 쌍 (영속되지 않음)
//! - [`RefreshToken`]: 키-값 저장소에 TTL과 함께 보관되는 리프레시 토큰 레코드

use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 토큰 용도
///
/// 리프레시 토큰을 액세스 토큰 자리에 제시하면 거부하기 위해 클레임에 포함합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 id (hex)
    pub sub: String,

    pub roles: Vec<String>,

    pub auth_provider: AuthProvider,

    pub token_type: TokenType,

    /// 매 발급마다 새로 생성되는 고유 id. 같은 초에 두 번 로그인해도 토큰이 겹치지 않습니다.
    pub jti: String,

    pub iat: i64,

    pub exp: i64,

    pub iss: String,
}

/// 액세스/리프레시 토큰 쌍
///
/// 액세스 토큰은 `Authorization` 헤더로, 리프레시 토큰은 `refreshToken` 쿠키로 전달됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtToken {
    pub access_token: String,
    pub refresh_token: String,
}

/// 저장소에 보관되는 리프레시 토큰
///
/// 저장소에 존재하는 것 자체가 유효성의 유일한 기준입니다.
/// 만료는 저장소의 TTL이 담당합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub refresh_token: String,
    pub user_id: String,
    pub issued_at: i64,
}

impl RefreshToken {
    pub fn new(refresh_token: String, user_id: String) -> Self {
        Self {
            refresh_token,
            user_id,
            issued_at: chrono::Utc::now().timestamp(),
        }
    }
}
