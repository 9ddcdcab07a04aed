//! 저장소 추상화
//!
//! 서비스는 구체 리포지토리 대신 이 트레이트들에 의존합니다.
//! 운영 환경에서는 MongoDB/Redis 리포지토리가, 테스트와 로컬 실행에서는
//! [`memory`](super::memory) 구현이 주입됩니다.
//!
//! 각 메서드는 독립적인 원자 연산이며, 여러 호출을 묶는 트랜잭션은 제공하지 않습니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::{Hackathon, Reservation, Team, TeamStatus, User};
use crate::domain::models::RefreshToken;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 이름, 생년월일, 전화번호가 모두 일치하는 계정
    async fn find_by_profile(&self, name: &str, birth: NaiveDate, phone_number: &str) -> AppResult<Option<User>>;

    /// 이메일이 이미 있으면 `ConflictError`
    async fn create(&self, user: User) -> AppResult<User>;

    async fn update_password(&self, id: &ObjectId, password_hash: String) -> AppResult<bool>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// 사용자가 리더 또는 멤버인 모든 예약 (저장 순서)
    async fn find_by_leader_or_member(&self, user_id: &ObjectId) -> AppResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Reservation>>;

    /// `id`가 없으면 새로 저장하고, 있으면 덮어씁니다.
    async fn save(&self, reservation: Reservation) -> AppResult<Reservation>;

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool>;
}

/// 리프레시 토큰 저장소
///
/// 토큰 문자열 자체가 키입니다. 저장된 항목은 TTL이 지나면 사라지며,
/// 존재 여부가 토큰 유효성의 유일한 기준입니다.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn save(&self, token: &RefreshToken, ttl_seconds: u64) -> AppResult<()>;

    async fn find(&self, refresh_token: &str) -> AppResult<Option<RefreshToken>>;

    async fn exists(&self, refresh_token: &str) -> AppResult<bool>;

    /// 실제로 지워졌으면 `true`
    async fn delete(&self, refresh_token: &str) -> AppResult<bool>;
}

/// 이메일 인증 코드와 인증 완료 표시 저장소
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    async fn save_code(&self, email: &str, code: &str, ttl_seconds: u64) -> AppResult<()>;

    async fn find_code(&self, email: &str) -> AppResult<Option<String>>;

    async fn delete_code(&self, email: &str) -> AppResult<()>;

    async fn mark_verified(&self, email: &str, ttl_seconds: u64) -> AppResult<()>;

    async fn is_verified(&self, email: &str) -> AppResult<bool>;

    async fn clear_verified(&self, email: &str) -> AppResult<()>;
}

#[async_trait]
pub trait HackathonStore: Send + Sync {
    async fn create(&self, hackathon: Hackathon) -> AppResult<Hackathon>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Hackathon>>;

    async fn find_all(&self) -> AppResult<Vec<Hackathon>>;
}

#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn create(&self, team: Team) -> AppResult<Team>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Team>>;

    /// `status`가 `None`이면 상태와 무관하게 전부
    async fn find_by_hackathon(&self, hackathon_id: &ObjectId, status: Option<TeamStatus>) -> AppResult<Vec<Team>>;

    async fn update_status(&self, id: &ObjectId, status: TeamStatus) -> AppResult<bool>;
}
