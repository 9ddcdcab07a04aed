//! 인메모리 저장소
//!
//! MongoDB/Redis 없이 서비스를 구동하기 위한 구현입니다. 통합 테스트와
//! `STORAGE=memory` 로컬 실행에서 사용합니다. TTL은 `Instant` 기준으로
//! 조회 시점에 판정합니다.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Hackathon, Reservation, Team, TeamStatus, User};
use crate::domain::models::RefreshToken;
use crate::repositories::stores::{
    HackathonStore, RefreshTokenStore, ReservationStore, TeamStore, UserStore, VerificationCodeStore,
};

fn poisoned() -> AppError {
    AppError::InternalError("인메모리 저장소 잠금이 손상되었습니다".to_string())
}

/// 만료 시각이 있는 값
#[derive(Debug, Clone)]
struct Expiring<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Expiring<T> {
    fn new(value: T, ttl_seconds: u64) -> Self {
        Self {
            value,
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        }
    }

    fn is_live(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_profile(&self, name: &str, birth: NaiveDate, phone_number: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users
            .iter()
            .find(|u| u.name == name && u.birth == birth && u.phone_number == phone_number)
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        user.id.get_or_insert_with(ObjectId::new);
        users.push(user.clone());
        Ok(user)
    }

    async fn update_password(&self, id: &ObjectId, password_hash: String) -> AppResult<bool> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        match users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            Some(user) => {
                user.password_hash = Some(password_hash);
                user.updated_at = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        let before = users.len();
        users.retain(|u| u.id.as_ref() != Some(id));
        Ok(users.len() < before)
    }
}

/// 저장 순서를 유지하는 예약 저장소
#[derive(Default)]
pub struct MemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn find_by_leader_or_member(&self, user_id: &ObjectId) -> AppResult<Vec<Reservation>> {
        let reservations = self.reservations.read().map_err(|_| poisoned())?;
        Ok(reservations.iter().filter(|r| r.involves(user_id)).cloned().collect())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Reservation>> {
        let reservations = self.reservations.read().map_err(|_| poisoned())?;
        Ok(reservations.iter().find(|r| r.id.as_ref() == Some(id)).cloned())
    }

    async fn save(&self, mut reservation: Reservation) -> AppResult<Reservation> {
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;

        match reservation.id {
            Some(id) => {
                let slot = reservations
                    .iter_mut()
                    .find(|r| r.id == Some(id))
                    .ok_or_else(|| AppError::NotFound("예약을 찾을 수 없습니다".to_string()))?;
                *slot = reservation.clone();
            }
            None => {
                reservation.id = Some(ObjectId::new());
                reservations.push(reservation.clone());
            }
        }

        Ok(reservation)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;
        let before = reservations.len();
        reservations.retain(|r| r.id.as_ref() != Some(id));
        Ok(reservations.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryRefreshTokenStore {
    tokens: RwLock<HashMap<String, Expiring<RefreshToken>>>,
}

impl MemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 만료되지 않은 토큰 수
    pub fn live_count(&self) -> usize {
        self.tokens
            .read()
            .map(|tokens| tokens.values().filter(|t| t.is_live()).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryRefreshTokenStore {
    async fn save(&self, token: &RefreshToken, ttl_seconds: u64) -> AppResult<()> {
        let mut tokens = self.tokens.write().map_err(|_| poisoned())?;
        tokens.retain(|_, t| t.is_live());
        tokens.insert(token.refresh_token.clone(), Expiring::new(token.clone(), ttl_seconds));
        Ok(())
    }

    async fn find(&self, refresh_token: &str) -> AppResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().map_err(|_| poisoned())?;
        Ok(tokens
            .get(refresh_token)
            .filter(|t| t.is_live())
            .map(|t| t.value.clone()))
    }

    async fn exists(&self, refresh_token: &str) -> AppResult<bool> {
        Ok(self.find(refresh_token).await?.is_some())
    }

    async fn delete(&self, refresh_token: &str) -> AppResult<bool> {
        let mut tokens = self.tokens.write().map_err(|_| poisoned())?;
        Ok(tokens
            .remove(refresh_token)
            .map(|t| t.is_live())
            .unwrap_or(false))
    }
}

#[derive(Default)]
pub struct MemoryVerificationCodeStore {
    codes: RwLock<HashMap<String, Expiring<String>>>,
    verified: RwLock<HashMap<String, Expiring<()>>>,
}

impl MemoryVerificationCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VerificationCodeStore for MemoryVerificationCodeStore {
    async fn save_code(&self, email: &str, code: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut codes = self.codes.write().map_err(|_| poisoned())?;
        codes.insert(email.to_lowercase(), Expiring::new(code.to_string(), ttl_seconds));
        Ok(())
    }

    async fn find_code(&self, email: &str) -> AppResult<Option<String>> {
        let codes = self.codes.read().map_err(|_| poisoned())?;
        Ok(codes
            .get(&email.to_lowercase())
            .filter(|c| c.is_live())
            .map(|c| c.value.clone()))
    }

    async fn delete_code(&self, email: &str) -> AppResult<()> {
        self.codes.write().map_err(|_| poisoned())?.remove(&email.to_lowercase());
        Ok(())
    }

    async fn mark_verified(&self, email: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut verified = self.verified.write().map_err(|_| poisoned())?;
        verified.insert(email.to_lowercase(), Expiring::new((), ttl_seconds));
        Ok(())
    }

    async fn is_verified(&self, email: &str) -> AppResult<bool> {
        let verified = self.verified.read().map_err(|_| poisoned())?;
        Ok(verified
            .get(&email.to_lowercase())
            .map(|v| v.is_live())
            .unwrap_or(false))
    }

    async fn clear_verified(&self, email: &str) -> AppResult<()> {
        self.verified.write().map_err(|_| poisoned())?.remove(&email.to_lowercase());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryHackathonStore {
    hackathons: RwLock<Vec<Hackathon>>,
}

impl MemoryHackathonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HackathonStore for MemoryHackathonStore {
    async fn create(&self, mut hackathon: Hackathon) -> AppResult<Hackathon> {
        hackathon.id.get_or_insert_with(ObjectId::new);
        self.hackathons.write().map_err(|_| poisoned())?.push(hackathon.clone());
        Ok(hackathon)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Hackathon>> {
        let hackathons = self.hackathons.read().map_err(|_| poisoned())?;
        Ok(hackathons.iter().find(|h| h.id.as_ref() == Some(id)).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Hackathon>> {
        let mut hackathons = self.hackathons.read().map_err(|_| poisoned())?.clone();
        hackathons.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(hackathons)
    }
}

#[derive(Default)]
pub struct MemoryTeamStore {
    teams: RwLock<Vec<Team>>,
}

impl MemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamStore for MemoryTeamStore {
    async fn create(&self, mut team: Team) -> AppResult<Team> {
        team.id.get_or_insert_with(ObjectId::new);
        self.teams.write().map_err(|_| poisoned())?.push(team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Team>> {
        let teams = self.teams.read().map_err(|_| poisoned())?;
        Ok(teams.iter().find(|t| t.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_hackathon(&self, hackathon_id: &ObjectId, status: Option<TeamStatus>) -> AppResult<Vec<Team>> {
        let teams = self.teams.read().map_err(|_| poisoned())?;
        Ok(teams
            .iter()
            .filter(|t| t.hackathon_id == *hackathon_id)
            .filter(|t| status.map_or(true, |s| t.team_status == s))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &ObjectId, status: TeamStatus) -> AppResult<bool> {
        let mut teams = self.teams.write().map_err(|_| poisoned())?;

        match teams.iter_mut().find(|t| t.id.as_ref() == Some(id)) {
            Some(team) => {
                team.team_status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 2)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[actix_web::test]
    async fn test_reservations_keep_insertion_order() {
        let store = MemoryReservationStore::new();
        let a = ObjectId::new();
        let b = ObjectId::new();
        let c = ObjectId::new();

        store.save(Reservation::new(a, b, at(11))).await.unwrap();
        store.save(Reservation::new(c, a, at(9))).await.unwrap();
        store.save(Reservation::new(b, c, at(10))).await.unwrap();

        let mine = store.find_by_leader_or_member(&a).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].is_at(&at(11)));
        assert!(mine[1].is_at(&at(9)));
    }

    #[actix_web::test]
    async fn test_saving_unknown_id_is_not_found() {
        let store = MemoryReservationStore::new();
        let mut reservation = Reservation::new(ObjectId::new(), ObjectId::new(), at(10));
        reservation.id = Some(ObjectId::new());

        let result = store.save(reservation).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_refresh_token_expires_with_ttl() {
        let store = MemoryRefreshTokenStore::new();
        let token = RefreshToken::new("short-lived".to_string(), ObjectId::new().to_hex());

        store.save(&token, 0).await.unwrap();

        assert!(!store.exists("short-lived").await.unwrap());
        assert_eq!(store.live_count(), 0);
    }

    #[actix_web::test]
    async fn test_refresh_token_delete_reports_removal() {
        let store = MemoryRefreshTokenStore::new();
        let token = RefreshToken::new("to-delete".to_string(), ObjectId::new().to_hex());
        store.save(&token, 60).await.unwrap();

        assert!(store.delete("to-delete").await.unwrap());
        assert!(!store.delete("to-delete").await.unwrap());
    }

    #[actix_web::test]
    async fn test_team_status_filter() {
        let store = MemoryTeamStore::new();
        let hackathon_id = ObjectId::new();

        let recruiting = store
            .create(Team::new(hackathon_id, "A".to_string(), String::new(), 4))
            .await
            .unwrap();
        let complete = store
            .create(Team::new(hackathon_id, "B".to_string(), String::new(), 4))
            .await
            .unwrap();
        store
            .update_status(complete.id.as_ref().unwrap(), TeamStatus::Complete)
            .await
            .unwrap();

        let only_recruiting = store
            .find_by_hackathon(&hackathon_id, Some(TeamStatus::Recruiting))
            .await
            .unwrap();
        assert_eq!(only_recruiting.len(), 1);
        assert_eq!(only_recruiting[0].id, recruiting.id);

        let all = store.find_by_hackathon(&hackathon_id, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
