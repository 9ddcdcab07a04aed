//! 통합 테스트 공용 준비물
//!
//! 테스트 바이너리마다 한 번, 인메모리 저장소로 조립한 서비스를 레지스트리에 등록합니다.
//! 테스트는 병렬로 돌기 때문에 각 테스트는 고유한 이메일로 사용자를 만들어 씁니다.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::{http::header, test};
use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use uuid::Uuid;

use link_backend::config::{TokenConfig, VerificationConfig};
use link_backend::core::errors::AppResult;
use link_backend::core::registry::ServiceLocator;
use link_backend::domain::entities::User;
use link_backend::repositories::memory::{
    MemoryHackathonStore, MemoryRefreshTokenStore, MemoryReservationStore, MemoryTeamStore,
    MemoryUserStore, MemoryVerificationCodeStore,
};
use link_backend::repositories::stores::UserStore;
use link_backend::services::auth::{AuthService, PasswordEncoder};
use link_backend::services::mail::MailSender;
use link_backend::services::reservations::ReservationService;
use link_backend::services::teams::TeamService;
use link_backend::services::users::UserService;

pub const PASSWORD: &str = "SecurePass123";
pub const REFRESH_TTL_SECONDS: i64 = 3600;

/// 발송된 인증 코드를 보관하는 메일 발송기
#[derive(Default)]
pub struct RecordingMail {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMail {
    pub fn code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl MailSender for RecordingMail {
    async fn send_verification_code(&self, email: &str, code: &str) -> AppResult<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((email.to_string(), code.to_string()));
        }
        Ok(())
    }
}

pub struct TestContext {
    pub users: Arc<MemoryUserStore>,
    pub refresh_tokens: Arc<MemoryRefreshTokenStore>,
    pub mail: Arc<RecordingMail>,
    pub passwords: PasswordEncoder,
}

static CONTEXT: Lazy<TestContext> = Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();

    let users = Arc::new(MemoryUserStore::new());
    let refresh_tokens = Arc::new(MemoryRefreshTokenStore::new());
    let mail = Arc::new(RecordingMail::default());
    let passwords = PasswordEncoder::new(4);

    ServiceLocator::set(Arc::new(AuthService::new(
        users.clone(),
        refresh_tokens.clone(),
        TokenConfig {
            secret: "integration-test-secret".to_string(),
            issuer: "link-test".to_string(),
            access_token_ttl_seconds: 600,
            refresh_token_ttl_seconds: REFRESH_TTL_SECONDS,
        },
        passwords,
    )));
    ServiceLocator::set(Arc::new(UserService::new(
        users.clone(),
        Arc::new(MemoryVerificationCodeStore::new()),
        mail.clone(),
        passwords,
        VerificationConfig::default(),
    )));
    ServiceLocator::set(Arc::new(ReservationService::new(
        Arc::new(MemoryReservationStore::new()),
        users.clone(),
    )));
    ServiceLocator::set(Arc::new(TeamService::new(
        Arc::new(MemoryHackathonStore::new()),
        Arc::new(MemoryTeamStore::new()),
    )));

    TestContext {
        users,
        refresh_tokens,
        mail,
        passwords,
    }
});

pub fn context() -> &'static TestContext {
    &CONTEXT
}

/// 테스트마다 겹치지 않는 이메일
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@link.io", prefix, Uuid::new_v4().simple())
}

pub async fn create_user(email: &str, roles: &[&str]) -> ObjectId {
    let ctx = context();
    let mut user = User::new_local(
        email.to_string(),
        ctx.passwords.hash(PASSWORD).expect("hash"),
        "테스터".to_string(),
        "tester".to_string(),
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("date"),
        "010-1234-5678".to_string(),
    );
    for role in roles {
        user = user.with_role(role);
    }

    ctx.users.create(user).await.expect("create user").id.expect("id")
}

pub struct LoggedIn {
    pub access_token: String,
    pub refresh_token: String,
}

impl LoggedIn {
    pub fn bearer(&self) -> (header::HeaderName, String) {
        (header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }
}

pub fn login_request(email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": email, "password": PASSWORD }))
}

/// 로그인 응답의 본문과 쿠키에서 토큰을 꺼냅니다.
pub async fn session_from<B: MessageBody>(resp: ServiceResponse<B>) -> LoggedIn {
    assert!(resp.status().is_success(), "login failed: {}", resp.status());

    let refresh_token = refresh_cookie_value(&resp).expect("refreshToken cookie");
    let body: Value = test::read_body_json(resp).await;

    LoggedIn {
        access_token: body["data"]["accessToken"].as_str().expect("accessToken").to_string(),
        refresh_token,
    }
}

pub fn refresh_cookie_value<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refreshToken")
        .map(|c| c.value().to_string())
}
