//! 라우트 구성
//!
//! | 스코프 | 미들웨어 | 내용 |
//! |--------|----------|------|
//! | `/health` | - | 헬스 체크 |
//! | `/api/users` | - | 회원가입, 로그인, 토큰 교환, 계정 찾기 |
//! | `/api/auth` | `AuthMiddleware::required()` | 내 정보, 예약, 해커톤/팀 |
//! | `/api/admin` | `AuthMiddleware::required_with_role("admin")` | 해커톤 등록 |

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_public_routes(cfg);
    configure_authenticated_routes(cfg);
    configure_admin_routes(cfg);
}

fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            // 회원가입
            .service(handlers::users::signup)
            .service(handlers::users::send_signup_code)
            .service(handlers::users::verify_signup_code)
            // 계정 찾기
            .service(handlers::users::find_email)
            .service(handlers::users::send_password_reset_code)
            .service(handlers::users::verify_password_reset_code)
            .service(handlers::users::reset_password)
            // 로그인/토큰
            .service(handlers::auth::login)
            .service(handlers::auth::issue_access_token)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::logout)
    );
}

fn configure_authenticated_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_current_user)
            .service(handlers::users::delete_account)
            .service(handlers::reservations::list_reservations)
            .service(handlers::reservations::create_reservation)
            .service(handlers::reservations::update_reservation)
            .service(handlers::reservations::delete_reservation)
            .service(handlers::teams::list_hackathons)
            .service(handlers::teams::get_hackathon)
            .service(handlers::teams::list_teams)
            .service(handlers::teams::create_team)
            .service(handlers::teams::complete_recruitment)
    );
}

fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(AuthMiddleware::required_with_role("admin"))
            .service(handlers::teams::create_hackathon)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "link_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
