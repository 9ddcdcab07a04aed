use async_trait::async_trait;
use singleton_macro::service;

use crate::core::errors::AppResult;

/// 인증 코드 메일 발송
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send_verification_code(&self, email: &str, code: &str) -> AppResult<()>;
}

/// 로그로 대신하는 메일 발송기
///
/// SMTP 연동 전까지 코드 원문 대신 마스킹된 값만 남깁니다.
#[service(name = "mail")]
pub struct MailService {}

impl MailService {
    fn masked(code: &str) -> String {
        let visible: String = code.chars().take(2).collect();
        format!("{}{}", visible, "*".repeat(code.chars().count().saturating_sub(2)))
    }
}

#[async_trait]
impl MailSender for MailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> AppResult<()> {
        log::info!("📧 인증 코드 발송 - to: {}, code: {}", email, Self::masked(code));
        Ok(())
    }
}
