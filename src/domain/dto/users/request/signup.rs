//! # 회원가입 요청 DTO
//!
//! 회원가입은 세 단계로 진행됩니다.
//!
//! 1. `POST /api/users/signup/email` - [`SendEmailRequest`]로 인증 코드 발송
//! 2. `GET /api/users/signup/email/verification` - [`VerificationQuery`]로 코드 확인
//! 3. `POST /api/users/signup` - [`SignUpRequest`]로 계정 생성
//!
//! 3단계는 2단계에서 남긴 인증 완료 표시가 유효한 동안에만 성공합니다.
//!
//! ## 검증 규칙
//!
//! - `email`: 이메일 형식
//! - `password`: 8자 이상, 대문자/소문자/숫자 포함, `passwordConfirm`과 일치
//! - `name`: 1-20자, `nickname`: 2-20자
//! - `phoneNumber`: 숫자와 하이픈, 10-13자

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청
///
/// ```json
/// {
///   "email": "user@link.io",
///   "password": "SecurePass123",
///   "passwordConfirm": "SecurePass123",
///   "name": "김링크",
///   "nickname": "linker",
///   "birth": "1999-03-14",
///   "phoneNumber": "010-1234-5678"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_passwords_match"))]
pub struct SignUpRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    pub password_confirm: String,

    #[validate(length(min = 1, max = 20, message = "이름은 1-20자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    pub nickname: String,

    pub birth: NaiveDate,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

/// 인증 코드 발송 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendEmailRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 회원가입 인증 코드 확인 (쿼리 파라미터)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerificationQuery {
    #[validate(length(equal = 6, message = "인증 코드는 6자리입니다"))]
    pub verification_code: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 인증 코드 확인 (본문)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    #[validate(length(equal = 6, message = "인증 코드는 6자리입니다"))]
    pub verification_key: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

fn validate_passwords_match(req: &SignUpRequest) -> Result<(), ValidationError> {
    passwords_match(&req.password, &req.password_confirm)
}

pub(crate) fn passwords_match(password: &str, password_confirm: &str) -> Result<(), ValidationError> {
    if password != password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

pub(crate) fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

pub(crate) fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let valid_chars = phone_number.chars().all(|c| c.is_ascii_digit() || c == '-');
    let digits = phone_number.chars().filter(|c| c.is_ascii_digit()).count();

    if !valid_chars || !(10..=11).contains(&digits) {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호 형식이 올바르지 않습니다".into()));
    }

    Ok(())
}
