//! 데이터 액세스 계층
//!
//! [`stores`]의 트레이트를 기준으로 두 가지 구현을 제공합니다.
//!
//! - `#[repository]` 매크로로 싱글톤 관리되는 MongoDB/Redis 리포지토리
//! - [`memory`]의 인메모리 구현 (테스트, 로컬 실행용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use link_backend::repositories::reservations::ReservationRepository;
//! use link_backend::repositories::stores::ReservationStore;
//!
//! let repo = ReservationRepository::instance();
//! let mine = repo.find_by_leader_or_member(&user_id).await?;
//! ```

pub mod stores;
pub mod users;
pub mod reservations;
pub mod tokens;
pub mod teams;
pub mod memory;

pub use stores::*;
