//! 비즈니스 로직 계층
//!
//! 각 서비스는 저장소 트레이트(`repositories::stores`)에만 의존합니다.
//! 운영에서는 `instance()`가 레지스트리를 통해 MongoDB/Redis 리포지토리로 조립된
//! 싱글톤을 돌려주고, 테스트는 `new()`로 인메모리 저장소를 넣어 직접 만들거나
//! `ServiceLocator::set`으로 미리 등록합니다.
//!
//! ```rust,ignore
//! use link_backend::services::reservations::ReservationService;
//!
//! let reservations = ReservationService::instance();
//! let mine = reservations.list_my_reservations(&user_id).await?;
//! ```

pub mod auth;
pub mod mail;
pub mod reservations;
pub mod teams;
pub mod users;
