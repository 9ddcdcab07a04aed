//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 이메일/비밀번호 로그인
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
