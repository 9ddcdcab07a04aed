//! 인증 관련 설정
//!
//! JWT 서명/만료, 비밀번호 해싱 비용, 이메일 인증 코드 TTL을 다룹니다.
//! 모든 TTL은 초 단위입니다.

use std::env;
use super::{env_or, Environment};

/// 인증 제공자
///
/// 로컬 계정은 비밀번호 해시를 가지며, 소셜 계정은 비밀번호 없이 생성됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
    GitHub,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "github" => Ok(AuthProvider::GitHub),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }
}

/// JWT 발급 설정
///
/// 기동 시 [`TokenConfig::from_env`]로 한 번 만들어 `TokenProvider`와 `AuthService`에 넘깁니다.
/// 리프레시 토큰 저장소의 TTL도 `refresh_token_ttl_seconds`를 그대로 사용합니다.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub issuer: String,
    pub access_token_ttl_seconds: i64,
    pub refresh_token_ttl_seconds: i64,
}

impl TokenConfig {
    /// 환경 변수에서 토큰 설정을 읽습니다.
    ///
    /// * `JWT_SECRET` - 서명 키 (없으면 개발용 기본값과 경고 로그)
    /// * `JWT_ISSUER` - `iss` 클레임 (기본값: `link`)
    /// * `ACCESS_TOKEN_EXPIRE_TIME` - 액세스 토큰 만료 (기본값: 1800)
    /// * `REFRESH_TOKEN_EXPIRE_TIME` - 리프레시 토큰 만료 (기본값: 1209600, 14일)
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "link-development-secret".to_string()
        });

        Self {
            secret,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "link".to_string()),
            access_token_ttl_seconds: bounded_ttl(
                "ACCESS_TOKEN_EXPIRE_TIME",
                env_or("ACCESS_TOKEN_EXPIRE_TIME", 1800),
                1800,
            ),
            refresh_token_ttl_seconds: bounded_ttl(
                "REFRESH_TOKEN_EXPIRE_TIME",
                env_or("REFRESH_TOKEN_EXPIRE_TIME", 1_209_600),
                1_209_600,
            ),
        }
    }
}

/// 토큰 만료 시간 상한 (1년)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 31_536_000;

/// 0 이하는 기본값으로, 상한을 넘으면 상한으로 맞춥니다.
fn bounded_ttl(key: &str, ttl: i64, default: i64) -> i64 {
    if ttl <= 0 {
        log::warn!("{}={}은(는) 양수가 아닙니다. 기본값 {} 사용", key, ttl, default);
        return default;
    }
    if ttl > MAX_TOKEN_TTL_SECONDS {
        log::warn!("{}={}이(가) 상한을 넘습니다. {} 사용", key, ttl, MAX_TOKEN_TTL_SECONDS);
        return MAX_TOKEN_TTL_SECONDS;
    }
    ttl
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`(4-15)가 유효하면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        let cost = env_or("BCRYPT_COST", 0u32);
        if (4..=15).contains(&cost) {
            return cost;
        }
        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 이메일 인증 코드 설정
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// 발송된 코드의 유효 시간
    pub code_ttl_seconds: u64,
    /// 인증 완료 표시의 유효 시간 (이 안에 가입/비밀번호 재설정을 마쳐야 함)
    pub verified_ttl_seconds: u64,
}

impl VerificationConfig {
    pub fn from_env() -> Self {
        Self {
            code_ttl_seconds: env_or("VERIFICATION_CODE_TTL", 300),
            verified_ttl_seconds: env_or("VERIFIED_EMAIL_TTL", 1800),
        }
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 300,
            verified_ttl_seconds: 1800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("GitHub").unwrap(), AuthProvider::GitHub);
        assert!(AuthProvider::from_str("twitter").is_err());
    }

    #[test]
    fn test_auth_provider_serializes_lowercase() {
        let json = serde_json::to_string(&AuthProvider::GitHub).unwrap();
        assert_eq!(json, "\"github\"");

        let parsed: AuthProvider = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, AuthProvider::Local);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_token_ttl_is_bounded() {
        assert_eq!(bounded_ttl("REFRESH_TOKEN_EXPIRE_TIME", 0, 1_209_600), 1_209_600);
        assert_eq!(bounded_ttl("REFRESH_TOKEN_EXPIRE_TIME", -60, 1_209_600), 1_209_600);
        assert_eq!(bounded_ttl("REFRESH_TOKEN_EXPIRE_TIME", i64::MAX, 1_209_600), MAX_TOKEN_TTL_SECONDS);
        assert_eq!(bounded_ttl("ACCESS_TOKEN_EXPIRE_TIME", 900, 1800), 900);
    }

    #[test]
    fn test_verification_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_ttl_seconds, 300);
        assert_eq!(config.verified_ttl_seconds, 1800);
    }
}
