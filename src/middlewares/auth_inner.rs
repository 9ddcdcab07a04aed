//! AuthMiddleware 요청 처리부
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use crate::core::AppError;
use crate::domain::models::{AuthenticatedUser, RequiredRole};
use crate::services::auth::AuthService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate_request(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(
                        req,
                        HttpResponse::Unauthorized(),
                        "authentication_required",
                        "유효한 인증 토큰이 필요합니다",
                    ));
                }
            };

            if let Some(required) = required_role.filter(|r| !r.is_satisfied(&user.roles)) {
                log::warn!("권한 부족: {} {:?}, 필요: {:?}", user.user_id.to_hex(), user.roles, required);
                return Ok(reject(
                    req,
                    HttpResponse::Forbidden(),
                    "insufficient_permissions",
                    "접근 권한이 부족합니다",
                ));
            }

            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 핸들러를 호출하지 않고 `{"error", "message"}` 본문으로 응답
fn reject<B>(
    req: ServiceRequest,
    mut builder: actix_web::HttpResponseBuilder,
    error: &str,
    message: &str,
) -> ServiceResponse<EitherBody<B>> {
    let response = builder.json(json!({ "error": error, "message": message }));
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// `Authorization: Bearer <access token>` 검증
fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let auth = AuthService::instance();
    let token = auth.token_provider().extract_bearer_token(header)?;
    auth.authenticate(token)
}
