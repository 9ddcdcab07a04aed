//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 핵심 객체 (User, Reservation, Hackathon, Team)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 저장되지 않거나 키-값 저장소에만 머무는 값 (토큰, 인증 주체)
//! ```
//!
//! 엔티티끼리는 `ObjectId`로만 참조하며 서로를 포함하지 않습니다.
//! 예약은 리더와 멤버의 식별자만 가지고, 팀은 해커톤 식별자만 가집니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Hackathon, Reservation, Team, TeamStatus, User};
pub use models::{AuthenticatedUser, JwtToken, RefreshToken, RequiredRole, TokenClaims, TokenType};
