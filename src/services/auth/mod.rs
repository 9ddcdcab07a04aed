//! 인증 서비스
//!
//! - [`AuthService`]: 로그인, 리프레시 토큰 교환/회전, 로그아웃, 액세스 토큰 검증
//! - [`TokenProvider`]: HS256 JWT 서명/검증
//! - [`PasswordEncoder`]: bcrypt

pub mod auth_service;
pub mod password;
pub mod token_provider;

pub use auth_service::AuthService;
pub use password::PasswordEncoder;
pub use token_provider::TokenProvider;
