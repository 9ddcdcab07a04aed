//! 계정 찾기/비밀번호 재설정 요청 DTO

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::signup::{passwords_match, validate_password_strength};

/// 이름, 생년월일, 전화번호로 가입 이메일 찾기
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindEmailRequest {
    #[validate(length(min = 1, max = 20, message = "이름은 1-20자 사이여야 합니다"))]
    pub name: String,

    pub birth: NaiveDate,

    #[validate(length(min = 1, message = "전화번호를 입력해주세요"))]
    pub phone_number: String,
}

/// 인증 완료된 이메일의 비밀번호 재설정
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_reset_passwords_match"))]
pub struct PasswordResetRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    pub password_confirm: String,
}

fn validate_reset_passwords_match(req: &PasswordResetRequest) -> Result<(), ValidationError> {
    passwords_match(&req.password, &req.password_confirm)
}
