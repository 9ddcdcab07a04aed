//! # Core Framework Module
//!
//! 서비스 전반이 공유하는 두 가지 기반 기능을 제공합니다.
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 조회 및 지연 생성
//! - **자동 레지스트리**: `inventory` 기반 리포지토리/서비스 등록
//! - **교체 가능성**: `ServiceLocator::set()`으로 미리 등록한 인스턴스가 항상 우선
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 매핑
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use link_backend::core::registry::ServiceLocator;
//!
//! // 1. 인프라 컴포넌트 등록
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::set(Arc::new(redis));
//!
//! // 2. 리포지토리/서비스 사전 생성
//! ServiceLocator::initialize_all().await?;
//!
//! // 3. 어디서든 조회
//! let reservations = ReservationService::instance();
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! panic: Circular dependency detected: AuthService is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: MailService. Register it with ...
//! ```
//! **해결**: `inventory::submit!` 등록 또는 `ServiceLocator::set()`으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
