//! 로그인/토큰 HTTP 핸들러
//!
//! 리프레시 토큰은 `refreshToken` 쿠키(`HttpOnly; Path=/`)로만 주고받고,
//! 액세스 토큰은 `Authorization: Bearer` 헤더와 본문으로 내려갑니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/users/login` | 로그인, 토큰 쌍 발급 |
//! | `POST` | `/api/users/oauth2/access` | 쿠키의 리프레시 토큰으로 액세스 토큰 발급 |
//! | `POST` | `/api/users/token/refresh` | 리프레시 토큰 회전 |
//! | `POST` | `/api/users/logout` | 리프레시 토큰 폐기, 쿠키 삭제 |

use actix_web::cookie::{time::Duration, Cookie};
use actix_web::http::header;
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::tokens::{AccessTokenResponse, ApiResponse};
use crate::domain::dto::users::LoginRequest;
use crate::domain::models::JwtToken;
use crate::services::auth::AuthService;

pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// 로그인
///
/// # Endpoint
/// `POST /api/users/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let auth_service = AuthService::instance();
    let tokens = auth_service.login(&payload.email, &payload.password).await?;

    Ok(token_pair_response(tokens, auth_service.refresh_token_ttl_seconds(), "로그인 성공"))
}

/// OAuth2 로그인 성공 후 리프레시 토큰 쿠키를 액세스 토큰으로 교환
///
/// # Endpoint
/// `POST /api/users/oauth2/access`
#[post("/oauth2/access")]
pub async fn issue_access_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let refresh_token = refresh_token_from_cookie(&req);

    let access_token = AuthService::instance().issue_from_refresh(&refresh_token).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .json(ApiResponse::success(AccessTokenResponse::bearer(access_token))))
}

/// 리프레시 토큰 회전
///
/// # Endpoint
/// `POST /api/users/token/refresh`
#[post("/token/refresh")]
pub async fn refresh_tokens(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let refresh_token = refresh_token_from_cookie(&req);

    let auth_service = AuthService::instance();
    let tokens = auth_service.refresh(&refresh_token).await?;

    Ok(token_pair_response(tokens, auth_service.refresh_token_ttl_seconds(), "토큰 갱신 성공"))
}

/// 로그아웃
///
/// # Endpoint
/// `POST /api/users/logout`
#[post("/logout")]
pub async fn logout(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let refresh_token = refresh_token_from_cookie(&req);

    AuthService::instance().logout(&refresh_token).await?;

    Ok(HttpResponse::Ok()
        .cookie(refresh_token_cookie(String::new(), 0))
        .json(ApiResponse::message("로그아웃 되었습니다")))
}

/// 쿠키가 없으면 빈 문자열 (서비스가 `InvalidArgument`로 거부)
fn refresh_token_from_cookie(req: &HttpRequest) -> String {
    req.cookie(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .unwrap_or_default()
}

fn refresh_token_cookie(value: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(REFRESH_TOKEN_COOKIE, value)
        .http_only(true)
        .path("/")
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

fn token_pair_response(tokens: JwtToken, refresh_ttl_seconds: i64, message: &str) -> HttpResponse {
    let JwtToken { access_token, refresh_token } = tokens;

    HttpResponse::Ok()
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .cookie(refresh_token_cookie(refresh_token, refresh_ttl_seconds))
        .json(ApiResponse::success_with_message(AccessTokenResponse::bearer(access_token), message))
}
