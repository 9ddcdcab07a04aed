//! # 계정 HTTP 핸들러
//!
//! ## 공개 엔드포인트 (`/api/users`)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/signup/email` | 회원가입 인증 코드 발송 | 200 |
//! | `GET` | `/signup/email/verification` | 인증 코드 확인 | 200 |
//! | `POST` | `/signup` | 회원가입 | 201 |
//! | `POST` | `/email` | 이메일 찾기 | 200 |
//! | `POST` | `/email/verification` | 비밀번호 재설정 인증 코드 발송 | 200 |
//! | `POST` | `/password/verification` | 비밀번호 재설정 인증 코드 확인 | 200 |
//! | `POST` | `/password` | 비밀번호 재설정 | 200 |
//!
//! ## 인증 필요 (`/api/auth`)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/me` | 내 정보 | 200 |
//! | `DELETE` | `/users` | 회원 탈퇴 | 204 |

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::tokens::ApiResponse;
use crate::domain::dto::users::{
    FindEmailRequest, FindEmailResponse, PasswordResetRequest, SendEmailRequest, SignUpRequest,
    SignUpResponse, VerificationQuery, VerificationRequest,
};
use crate::domain::models::AuthenticatedUser;
use crate::services::users::UserService;

#[post("/signup/email")]
pub async fn send_signup_code(payload: web::Json<SendEmailRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    UserService::instance().send_signup_verification(&payload.email).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("인증 코드가 발송되었습니다")))
}

#[get("/signup/email/verification")]
pub async fn verify_signup_code(query: web::Query<VerificationQuery>) -> Result<HttpResponse, AppError> {
    query.validate()?;

    UserService::instance()
        .confirm_verification(&query.verification_code, &query.email)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("이메일 인증이 완료되었습니다")))
}

#[post("/signup")]
pub async fn signup(payload: web::Json<SignUpRequest>) -> Result<HttpResponse, AppError> {
    let user_id = UserService::instance().signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        SignUpResponse { user_id: user_id.to_hex() },
        "회원가입이 완료되었습니다",
    )))
}

#[post("/email")]
pub async fn find_email(payload: web::Json<FindEmailRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let email = UserService::instance()
        .find_email(&payload.name, payload.birth, &payload.phone_number)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(FindEmailResponse { email })))
}

#[post("/email/verification")]
pub async fn send_password_reset_code(payload: web::Json<SendEmailRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    UserService::instance().send_password_reset_verification(&payload.email).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("인증 코드가 발송되었습니다")))
}

#[post("/password/verification")]
pub async fn verify_password_reset_code(payload: web::Json<VerificationRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    UserService::instance()
        .confirm_verification(&payload.verification_key, &payload.email)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("이메일 인증이 완료되었습니다")))
}

#[post("/password")]
pub async fn reset_password(payload: web::Json<PasswordResetRequest>) -> Result<HttpResponse, AppError> {
    UserService::instance().reset_password(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("비밀번호가 변경되었습니다")))
}

#[get("/users/me")]
pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let profile = UserService::instance().get_profile(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

/// 회원 탈퇴
///
/// 발급된 리프레시 토큰은 TTL이 지나면 사라지며, 그 전에 교환을 시도해도
/// 사용자 조회 단계에서 거부됩니다.
#[delete("/users")]
pub async fn delete_account(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    UserService::instance().delete_account(&user.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
