//! 미들웨어
//!
//! ## 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 검증
//! - 인증 주체를 request extensions에 저장
//! - 역할 요구 시 403 응답
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/auth")
//!             .wrap(AuthMiddleware::required())
//!             .route("/users/me", web::get().to(get_current_user))
//!     )
//!     .service(
//!         web::scope("/api/admin")
//!             .wrap(AuthMiddleware::required_with_role("admin"))
//!             .route("/hackathons", web::post().to(create_hackathon))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
