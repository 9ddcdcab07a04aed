//! JWT 발급/검증
//!
//! HS256 대칭 키로 액세스 토큰과 리프레시 토큰을 서명합니다. 두 토큰은
//! `token_type` 클레임으로 구분되며, 리프레시 토큰은 액세스 토큰 자리에서 거부됩니다.
//!
//! 리프레시 토큰의 유효성은 서명이 아니라 저장소 존재 여부로 판단하므로
//! 이 모듈은 리프레시 토큰을 검증하지 않습니다. 발급만 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::TokenConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::User;
use crate::domain::models::{JwtToken, TokenClaims, TokenType};

pub struct TokenProvider {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenProvider {
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }

    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.config.access_token_ttl_seconds
    }

    pub fn refresh_token_ttl_seconds(&self) -> i64 {
        self.config.refresh_token_ttl_seconds
    }

    /// 액세스/리프레시 토큰 쌍 발급
    pub fn issue_pair(&self, user: &User) -> AppResult<JwtToken> {
        Ok(JwtToken {
            access_token: self.create_token(user, TokenType::Access)?,
            refresh_token: self.create_token(user, TokenType::Refresh)?,
        })
    }

    pub fn create_access_token(&self, user: &User) -> AppResult<String> {
        self.create_token(user, TokenType::Access)
    }

    fn create_token(&self, user: &User, token_type: TokenType) -> AppResult<String> {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.config.access_token_ttl_seconds,
            TokenType::Refresh => self.config.refresh_token_ttl_seconds,
        };
        let expires_at = Duration::try_seconds(ttl)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::InternalError(format!("토큰 만료 시간이 범위를 벗어났습니다: {}초", ttl)))?;

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            roles: user.roles.clone(),
            auth_provider: user.auth_provider.clone(),
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// 액세스 토큰 검증
    ///
    /// 서명, 만료, 발급자를 확인하고 리프레시 토큰이면 거부합니다.
    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::AuthenticationError("액세스 토큰이 아닙니다".to_string()));
        }

        Ok(claims)
    }

    /// `Bearer <token>` 헤더에서 토큰 부분 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mongodb::bson::oid::ObjectId;

    fn config(access_ttl: i64) -> TokenConfig {
        TokenConfig {
            secret: "test-secret".to_string(),
            issuer: "link-test".to_string(),
            access_token_ttl_seconds: access_ttl,
            refresh_token_ttl_seconds: 3600,
        }
    }

    fn user() -> User {
        let mut user = User::new_local(
            "token@link.io".to_string(),
            "hash".to_string(),
            "토큰".to_string(),
            "token".to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            "010-1111-2222".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_access_token_round_trip_claims() {
        let provider = TokenProvider::new(config(600));
        let user = user();

        let token = provider.create_access_token(&user).unwrap();
        let claims = provider.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.roles, vec!["user".to_string()]);
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.iss, "link-test");
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[test]
    fn test_refresh_token_rejected_as_access_token() {
        let provider = TokenProvider::new(config(600));
        let pair = provider.issue_pair(&user()).unwrap();

        let result = provider.verify_access_token(&pair.refresh_token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_each_issue_is_unique() {
        let provider = TokenProvider::new(config(600));
        let user = user();

        let first = provider.issue_pair(&user).unwrap();
        let second = provider.issue_pair(&user).unwrap();
        assert_ne!(first.refresh_token, second.refresh_token);
        assert_ne!(first.access_token, second.access_token);
    }

    #[test]
    fn test_expired_access_token_is_rejected() {
        let provider = TokenProvider::new(config(-10));
        let token = provider.create_access_token(&user()).unwrap();

        let result = provider.verify_access_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(msg)) if msg.contains("만료")));
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error_not_a_panic() {
        let provider = TokenProvider::new(config(i64::MAX));

        let result = provider.create_access_token(&user());
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let provider = TokenProvider::new(config(600));
        let mut other_config = config(600);
        other_config.secret = "another-secret".to_string();
        let other = TokenProvider::new(other_config);

        let token = other.create_access_token(&user()).unwrap();
        assert!(provider.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let provider = TokenProvider::new(config(600));

        assert_eq!(provider.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(provider.extract_bearer_token("Basic abc").is_err());
        assert!(provider.extract_bearer_token("Bearer ").is_err());
    }
}
