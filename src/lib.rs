//! 링크 백엔드
//!
//! 해커톤 팀 매칭 서비스의 API 서버입니다.
//!
//! # Features
//!
//! - **계정**: 이메일 인증 회원가입, 이메일 찾기, 비밀번호 재설정, 탈퇴
//! - **토큰**: HS256 액세스/리프레시 토큰, 리프레시 토큰 저장소 기반 폐기와 회전
//! - **예약**: 사용자 간 면담 예약, 같은 시각 중복 예약 방지
//! - **해커톤/팀**: 해커톤 등록, 팀 생성과 모집 상태 관리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/users, /api/auth, /api/admin
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← DTO 검증, 쿠키/헤더 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙 (저장소 트레이트에만 의존)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB/Redis 어댑터, 인메모리 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use link_backend::services::auth::AuthService;
//! use link_backend::services::reservations::ReservationService;
//!
//! let tokens = AuthService::instance().login("user@link.io", "SecurePass123").await?;
//! let mine = ReservationService::instance().list_my_reservations(&user_id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
