//! JWT 인증 미들웨어
//!
//! `Authorization: Bearer <access token>` 헤더를 검증하고 [`AuthenticatedUser`]를
//! 요청 extensions에 넣습니다. 스코프 단위로 적용합니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음, 형식 오류, 서명/만료/발급자 불일치, 리프레시 토큰 | `401 authentication_required` |
//! | 인증은 되었으나 역할 부족 | `403 insufficient_permissions` |
//!
//! [`AuthenticatedUser`]: crate::domain::models::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (없으면 인증만 확인)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 유효한 액세스 토큰만 요구
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 인증 + 특정 역할 요구
    pub fn required_with_role(role: &str) -> Self {
        Self {
            required_role: Some(RequiredRole::new(role)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Once};
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::NaiveDate;
    use mongodb::bson::oid::ObjectId;

    use super::*;
    use crate::config::TokenConfig;
    use crate::core::registry::ServiceLocator;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::AuthenticatedUser;
    use crate::repositories::memory::{MemoryRefreshTokenStore, MemoryUserStore};
    use crate::services::auth::{AuthService, PasswordEncoder, TokenProvider};

    const SECRET: &str = "middleware-test-secret";

    fn token_config() -> TokenConfig {
        TokenConfig {
            secret: SECRET.to_string(),
            issuer: "link-test".to_string(),
            access_token_ttl_seconds: 600,
            refresh_token_ttl_seconds: 3600,
        }
    }

    fn install_auth_service() {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            ServiceLocator::set(Arc::new(AuthService::new(
                Arc::new(MemoryUserStore::new()),
                Arc::new(MemoryRefreshTokenStore::new()),
                token_config(),
                PasswordEncoder::new(4),
            )));
        });
    }

    fn tokens_for(roles: &[&str]) -> crate::domain::models::JwtToken {
        let mut user = User::new_local(
            "mw@link.io".to_string(),
            "hash".to_string(),
            "미들웨어".to_string(),
            "mw".to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            "010-0000-1111".to_string(),
        );
        user.id = Some(ObjectId::new());
        for role in roles {
            user = user.with_role(role);
        }
        TokenProvider::new(token_config()).issue_pair(&user).unwrap()
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id.to_hex())
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        install_auth_service();
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).route("/me", web::get().to(whoami))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/p/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_valid_access_token_reaches_handler() {
        install_auth_service();
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).route("/me", web::get().to(whoami))),
        )
        .await;
        let tokens = tokens_for(&[]);

        let req = test::TestRequest::get()
            .uri("/p/me")
            .insert_header(("Authorization", format!("Bearer {}", tokens.access_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_refresh_token_in_header_is_unauthorized() {
        install_auth_service();
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).route("/me", web::get().to(whoami))),
        )
        .await;
        let tokens = tokens_for(&[]);

        let req = test::TestRequest::get()
            .uri("/p/me")
            .insert_header(("Authorization", format!("Bearer {}", tokens.refresh_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_missing_role_is_forbidden() {
        install_auth_service();
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role("admin"))
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let user_req = test::TestRequest::get()
            .uri("/admin/me")
            .insert_header(("Authorization", format!("Bearer {}", tokens_for(&[]).access_token)))
            .to_request();
        let resp = test::call_service(&app, user_req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "insufficient_permissions");

        let admin_req = test::TestRequest::get()
            .uri("/admin/me")
            .insert_header(("Authorization", format!("Bearer {}", tokens_for(&["admin"]).access_token)))
            .to_request();
        assert_eq!(test::call_service(&app, admin_req).await.status(), StatusCode::OK);
    }
}
