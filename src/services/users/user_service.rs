//! # 계정 관리 서비스
//!
//! 이메일 인증 기반 회원가입, 이메일 찾기, 비밀번호 재설정, 탈퇴를 담당합니다.
//!
//! ## 이메일 인증 흐름
//!
//! ```text
//! send_*_verification(email)
//!   └─ 6자리 코드 생성 → 저장 (VERIFICATION_CODE_TTL) → 메일 발송
//! confirm_verification(code, email)
//!   └─ 코드 일치 → 코드 삭제 → 인증 완료 표시 (VERIFIED_EMAIL_TTL)
//! signup / reset_password
//!   └─ 인증 완료 표시 확인 → 처리 → 표시 삭제
//! ```
//!
//! 인증 완료 표시는 한 번 쓰면 사라지므로 같은 인증으로 두 번 가입하거나
//! 비밀번호를 두 번 바꿀 수 없습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;
use validator::Validate;

use crate::config::VerificationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::users::{PasswordResetRequest, SignUpRequest, UserResponse};
use crate::domain::entities::users::user::User;
use crate::repositories::stores::{UserStore, VerificationCodeStore};
use crate::repositories::tokens::VerificationCodeRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::PasswordEncoder;
use crate::services::mail::{MailSender, MailService};

pub struct UserService {
    users: Arc<dyn UserStore>,
    codes: Arc<dyn VerificationCodeStore>,
    mail: Arc<dyn MailSender>,
    passwords: PasswordEncoder,
    verification: VerificationConfig,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        codes: Arc<dyn VerificationCodeStore>,
        mail: Arc<dyn MailSender>,
        passwords: PasswordEncoder,
        verification: VerificationConfig,
    ) -> Self {
        Self {
            users,
            codes,
            mail,
            passwords,
            verification,
        }
    }

    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn build() -> Self {
        Self::new(
            UserRepository::instance(),
            VerificationCodeRepository::instance(),
            MailService::instance(),
            PasswordEncoder::from_env(),
            VerificationConfig::from_env(),
        )
    }

    /// 회원가입용 인증 코드 발송
    ///
    /// 이미 가입된 이메일이면 `ConflictError`
    pub async fn send_signup_verification(&self, email: &str) -> AppResult<()> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::ConflictError("이미 가입된 이메일입니다".to_string()));
        }

        self.issue_code(email).await
    }

    /// 인증 코드 확인
    ///
    /// 코드가 없거나 다르면 `InvalidArgument`. 성공하면 코드를 지우고
    /// 인증 완료 표시를 남깁니다.
    pub async fn confirm_verification(&self, code: &str, email: &str) -> AppResult<()> {
        let stored = self.codes.find_code(email).await?;

        if stored.as_deref() != Some(code) {
            log::warn!("인증 코드 불일치: {}", email);
            return Err(AppError::InvalidArgument("인증 코드가 올바르지 않습니다".to_string()));
        }

        self.codes.delete_code(email).await?;
        self.codes
            .mark_verified(email, self.verification.verified_ttl_seconds)
            .await?;

        log::info!("이메일 인증 완료: {}", email);
        Ok(())
    }

    /// 로컬 계정 생성
    pub async fn signup(&self, request: SignUpRequest) -> AppResult<ObjectId> {
        request.validate()?;

        self.require_verified(&request.email).await?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 가입된 이메일입니다".to_string()));
        }

        let password_hash = self.passwords.hash(&request.password)?;

        let user = User::new_local(
            request.email,
            password_hash,
            request.name,
            request.nickname,
            request.birth,
            request.phone_number,
        );

        let created = self.users.create(user).await?;
        self.codes.clear_verified(&created.email).await?;

        let user_id = created.id
            .ok_or_else(|| AppError::InternalError("생성된 사용자에 id가 없습니다".to_string()))?;

        log::info!("회원가입 완료: {} ({})", created.email, user_id.to_hex());
        Ok(user_id)
    }

    /// 이름, 생년월일, 전화번호로 가입 이메일 찾기
    pub async fn find_email(&self, name: &str, birth: NaiveDate, phone_number: &str) -> AppResult<String> {
        self.users
            .find_by_profile(name, birth, phone_number)
            .await?
            .map(|user| user.email)
            .ok_or_else(|| AppError::NotFound("일치하는 계정이 없습니다".to_string()))
    }

    /// 비밀번호 재설정용 인증 코드 발송
    ///
    /// 계정이 없으면 `NotFound`, 소셜 계정이면 `InvalidArgument`
    pub async fn send_password_reset_verification(&self, email: &str) -> AppResult<()> {
        let user = self.find_by_email(email).await?;

        if !user.is_local_auth() {
            return Err(AppError::InvalidArgument(format!(
                "{} 로그인 계정은 비밀번호를 재설정할 수 없습니다",
                user.auth_provider.as_str()
            )));
        }

        self.issue_code(email).await
    }

    pub async fn reset_password(&self, request: PasswordResetRequest) -> AppResult<()> {
        request.validate()?;

        self.require_verified(&request.email).await?;

        let user = self.find_by_email(&request.email).await?;
        let user_id = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let password_hash = self.passwords.hash(&request.password)?;
        if !self.users.update_password(&user_id, password_hash).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.codes.clear_verified(&request.email).await?;

        log::info!("비밀번호 재설정 완료: {}", request.email);
        Ok(())
    }

    pub async fn delete_account(&self, user_id: &ObjectId) -> AppResult<()> {
        if !self.users.delete(user_id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("회원 탈퇴: {}", user_id.to_hex());
        Ok(())
    }

    pub async fn get_profile(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("가입되지 않은 이메일입니다".to_string()))
    }

    async fn issue_code(&self, email: &str) -> AppResult<()> {
        let code = generate_code();

        self.codes
            .save_code(email, &code, self.verification.code_ttl_seconds)
            .await?;
        self.mail.send_verification_code(email, &code).await
    }

    async fn require_verified(&self, email: &str) -> AppResult<()> {
        if !self.codes.is_verified(email).await? {
            return Err(AppError::InvalidArgument("이메일 인증이 필요합니다".to_string()));
        }
        Ok(())
    }
}

/// 000000-999999
fn generate_code() -> String {
    format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000)
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!(
            "Service user initialized (code ttl {}s, verified ttl {}s)",
            self.verification.code_ttl_seconds,
            self.verification.verified_ttl_seconds
        );
        Ok(())
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: || Box::new(Arc::new(UserService::build())),
    }
}
