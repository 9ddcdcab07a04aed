//! # 토큰 생명주기 관리
//!
//! 로그인, 리프레시 토큰 교환, 회전, 로그아웃을 담당합니다.
//!
//! ```text
//! Anonymous ──login──▶ Authenticated ──logout / refresh TTL 만료──▶ Anonymous
//! ```
//!
//! 리프레시 토큰의 유효성은 저장소 존재 여부 하나로 결정됩니다.
//! 폐기(logout)나 회전(refresh)은 저장소에서 지우는 것으로 끝납니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::config::TokenConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::entities::users::user::User;
use crate::domain::models::{AuthenticatedUser, JwtToken, RefreshToken};
use crate::repositories::stores::{RefreshTokenStore, UserStore};
use crate::repositories::tokens::RefreshTokenRepository;
use crate::repositories::users::UserRepository;
use super::password::PasswordEncoder;
use super::token_provider::TokenProvider;

pub struct AuthService {
    users: Arc<dyn UserStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    tokens: TokenProvider,
    passwords: PasswordEncoder,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        token_config: TokenConfig,
        passwords: PasswordEncoder,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            tokens: TokenProvider::new(token_config),
            passwords,
        }
    }

    /// 등록된 싱글톤 (없으면 MongoDB/Redis 리포지토리로 생성)
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn build() -> Self {
        Self::new(
            UserRepository::instance(),
            RefreshTokenRepository::instance(),
            TokenConfig::from_env(),
            PasswordEncoder::from_env(),
        )
    }

    pub fn refresh_token_ttl_seconds(&self) -> i64 {
        self.tokens.refresh_token_ttl_seconds()
    }

    pub fn token_provider(&self) -> &TokenProvider {
        &self.tokens
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공하면 새 토큰 쌍을 발급하고 리프레시 토큰을 TTL과 함께 저장합니다.
    /// 이메일 없음, 비밀번호 불일치, 소셜 전용 계정, 비활성 계정은 모두 같은
    /// `AuthenticationError`로 응답해 계정 존재 여부를 드러내지 않습니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<JwtToken> {
        let user = self.users
            .find_by_email(email)
            .await?
            .ok_or_else(Self::bad_credentials)?;

        let password_hash = match (&user.password_hash, user.can_authenticate_with_password()) {
            (Some(hash), true) => hash,
            _ => {
                log::warn!("비밀번호 로그인이 불가능한 계정: {} ({})", email, user.auth_provider.as_str());
                return Err(Self::bad_credentials());
            }
        };

        if !self.passwords.matches(password, password_hash)? {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", email);
            return Err(Self::bad_credentials());
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        let tokens = self.issue_and_store(&user).await?;
        log::info!("로그인 성공: {}", email);
        Ok(tokens)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급 (OAuth2 로그인 직후 교환 경로)
    ///
    /// 리프레시 토큰은 그대로 유지됩니다.
    pub async fn issue_from_refresh(&self, refresh_token: &str) -> AppResult<String> {
        let user = self.user_for_refresh_token(refresh_token).await?;
        self.tokens.create_access_token(&user)
    }

    /// 리프레시 토큰 회전
    ///
    /// 제시된 토큰을 저장소에서 지운 뒤 새 쌍을 발급해 저장합니다.
    /// 같은 토큰으로 두 번 요청하면 두 번째는 `AuthenticationError`입니다.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<JwtToken> {
        let refresh_token = Self::require_token(refresh_token)?;
        let user = self.user_for_refresh_token(refresh_token).await?;

        if !self.refresh_tokens.delete(refresh_token).await? {
            // 조회와 삭제 사이에 다른 요청이 먼저 회전시킨 경우
            return Err(Self::unknown_refresh_token());
        }

        let tokens = self.issue_and_store(&user).await?;
        log::info!("리프레시 토큰 회전 - user_id: {}", user.id_string().unwrap_or_default());
        Ok(tokens)
    }

    /// 리프레시 토큰 폐기
    ///
    /// 저장소에 없는 토큰이어도 성공합니다.
    pub async fn logout(&self, refresh_token: &str) -> AppResult<()> {
        let refresh_token = Self::require_token(refresh_token)?;

        if self.refresh_tokens.delete(refresh_token).await? {
            log::info!("로그아웃 - 리프레시 토큰 폐기");
        } else {
            log::debug!("로그아웃 - 이미 없는 리프레시 토큰");
        }
        Ok(())
    }

    /// 액세스 토큰 검증 후 인증 주체 생성
    pub fn authenticate(&self, access_token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.tokens.verify_access_token(access_token)?;

        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            auth_provider: claims.auth_provider,
            roles: claims.roles,
        })
    }

    async fn issue_and_store(&self, user: &User) -> AppResult<JwtToken> {
        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let tokens = self.tokens.issue_pair(user)?;
        let ttl = u64::try_from(self.tokens.refresh_token_ttl_seconds()).unwrap_or(0);

        self.refresh_tokens
            .save(&RefreshToken::new(tokens.refresh_token.clone(), user_id), ttl)
            .await?;

        Ok(tokens)
    }

    async fn user_for_refresh_token(&self, refresh_token: &str) -> AppResult<User> {
        let refresh_token = Self::require_token(refresh_token)?;

        let stored = self.refresh_tokens
            .find(refresh_token)
            .await?
            .ok_or_else(Self::unknown_refresh_token)?;

        let user_id = ObjectId::parse_str(&stored.user_id)
            .map_err(|_| Self::unknown_refresh_token())?;

        let user = self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("존재하지 않는 사용자입니다".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }
        Ok(user)
    }

    fn require_token(refresh_token: &str) -> AppResult<&str> {
        let trimmed = refresh_token.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidArgument("쿠키가 제대로 설정되지 않았습니다".to_string()));
        }
        Ok(trimmed)
    }

    fn bad_credentials() -> AppError {
        AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string())
    }

    fn unknown_refresh_token() -> AppError {
        AppError::AuthenticationError("유효하지 않거나 만료된 리프레시 토큰입니다".to_string())
    }
}

#[async_trait]
impl Service for AuthService {
    fn name(&self) -> &str {
        "auth"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!(
            "Service auth initialized (access ttl {}s, refresh ttl {}s)",
            self.tokens.access_token_ttl_seconds(),
            self.tokens.refresh_token_ttl_seconds()
        );
        Ok(())
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "auth_service",
        constructor: || Box::new(Arc::new(AuthService::build())),
    }
}
