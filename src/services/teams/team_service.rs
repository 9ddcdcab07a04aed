//! # 해커톤/팀 서비스
//!
//! 해커톤 등록과 조회, 해커톤별 팀 생성과 모집 상태 전환을 담당합니다.
//! 팀 상태는 `RECRUITING → COMPLETE` 한 방향으로만 바뀝니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::teams::{CreateHackathonRequest, CreateTeamRequest, HackathonResponse, TeamResponse};
use crate::domain::entities::teams::hackathon::Hackathon;
use crate::domain::entities::teams::team::{Team, TeamStatus};
use crate::repositories::stores::{HackathonStore, TeamStore};
use crate::repositories::teams::{HackathonRepository, TeamRepository};

pub struct TeamService {
    hackathons: Arc<dyn HackathonStore>,
    teams: Arc<dyn TeamStore>,
}

impl TeamService {
    pub fn new(hackathons: Arc<dyn HackathonStore>, teams: Arc<dyn TeamStore>) -> Self {
        Self { hackathons, teams }
    }

    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn build() -> Self {
        Self::new(HackathonRepository::instance(), TeamRepository::instance())
    }

    pub async fn create_hackathon(&self, request: CreateHackathonRequest) -> AppResult<HackathonResponse> {
        request.validate()?;

        let hackathon = Hackathon {
            id: None,
            hackathon_name: request.hackathon_name,
            register_date: request.register_date,
            team_deadline_date: request.team_deadline_date,
            start_date: request.start_date,
            end_date: request.end_date,
            max_point: request.max_point,
        };

        if !hackathon.has_valid_schedule() {
            return Err(AppError::InvalidArgument("해커톤 일정 순서가 올바르지 않습니다".to_string()));
        }

        let created = self.hackathons.create(hackathon).await?;
        log::info!("해커톤 등록: {}", created.hackathon_name);
        Ok(created.into())
    }

    /// 시작일 내림차순
    pub async fn list_hackathons(&self) -> AppResult<Vec<HackathonResponse>> {
        let hackathons = self.hackathons.find_all().await?;
        Ok(hackathons.into_iter().map(HackathonResponse::from).collect())
    }

    pub async fn get_hackathon(&self, hackathon_id: &ObjectId) -> AppResult<HackathonResponse> {
        Ok(self.find_hackathon(hackathon_id).await?.into())
    }

    /// 팀 생성
    ///
    /// `today`가 팀 마감일을 지났으면 `InvalidArgument`
    pub async fn create_team(
        &self,
        hackathon_id: &ObjectId,
        request: CreateTeamRequest,
        today: NaiveDate,
    ) -> AppResult<TeamResponse> {
        request.validate()?;

        let hackathon = self.find_hackathon(hackathon_id).await?;
        if !hackathon.accepts_teams_on(today) {
            return Err(AppError::InvalidArgument(format!(
                "팀 생성 마감일({})이 지났습니다",
                hackathon.team_deadline_date
            )));
        }

        let team = Team::new(*hackathon_id, request.team_name, request.team_desc, request.max_team_member);
        let created = self.teams.create(team).await?;

        log::info!("팀 생성: {} (hackathon {})", created.team_name, hackathon_id.to_hex());
        Ok(created.into())
    }

    pub async fn list_teams(&self, hackathon_id: &ObjectId, status: Option<TeamStatus>) -> AppResult<Vec<TeamResponse>> {
        self.find_hackathon(hackathon_id).await?;

        let teams = self.teams.find_by_hackathon(hackathon_id, status).await?;
        Ok(teams.into_iter().map(TeamResponse::from).collect())
    }

    /// 모집 완료 처리. 이미 완료된 팀이면 `ConflictError`
    pub async fn complete_recruitment(&self, team_id: &ObjectId) -> AppResult<TeamResponse> {
        let mut team = self.teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("팀을 찾을 수 없습니다".to_string()))?;

        if !team.is_recruiting() {
            return Err(AppError::ConflictError("이미 모집이 완료된 팀입니다".to_string()));
        }

        if !self.teams.update_status(team_id, TeamStatus::Complete).await? {
            return Err(AppError::NotFound("팀을 찾을 수 없습니다".to_string()));
        }
        team.team_status = TeamStatus::Complete;

        log::info!("팀 모집 완료: {}", team_id.to_hex());
        Ok(team.into())
    }

    async fn find_hackathon(&self, hackathon_id: &ObjectId) -> AppResult<Hackathon> {
        self.hackathons
            .find_by_id(hackathon_id)
            .await?
            .ok_or_else(|| AppError::NotFound("해커톤을 찾을 수 없습니다".to_string()))
    }
}

#[async_trait]
impl Service for TeamService {
    fn name(&self) -> &str {
        "team"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Service team initialized");
        Ok(())
    }
}

inventory::submit! {
    ServiceRegistration {
        name: "team_service",
        constructor: || Box::new(Arc::new(TeamService::build())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{MemoryHackathonStore, MemoryTeamStore};

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn service() -> TeamService {
        TeamService::new(Arc::new(MemoryHackathonStore::new()), Arc::new(MemoryTeamStore::new()))
    }

    fn hackathon_request(name: &str, start_month: u32) -> CreateHackathonRequest {
        CreateHackathonRequest {
            hackathon_name: name.to_string(),
            register_date: date(start_month - 1, 1),
            team_deadline_date: date(start_month - 1, 20),
            start_date: date(start_month, 1),
            end_date: date(start_month, 3),
            max_point: 100,
        }
    }

    fn team_request(name: &str) -> CreateTeamRequest {
        CreateTeamRequest {
            team_name: name.to_string(),
            team_desc: "백엔드 구합니다".to_string(),
            max_team_member: 4,
        }
    }

    async fn hackathon_id(service: &TeamService) -> ObjectId {
        let created = service.create_hackathon(hackathon_request("Link Hackathon", 11)).await.unwrap();
        ObjectId::parse_str(&created.hackathon_id).unwrap()
    }

    #[actix_web::test]
    async fn test_hackathons_are_listed_latest_first() {
        let service = service();
        service.create_hackathon(hackathon_request("봄", 4)).await.unwrap();
        service.create_hackathon(hackathon_request("가을", 10)).await.unwrap();

        let names: Vec<_> = service
            .list_hackathons()
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.hackathon_name)
            .collect();
        assert_eq!(names, vec!["가을".to_string(), "봄".to_string()]);
    }

    #[actix_web::test]
    async fn test_invalid_schedule_is_rejected() {
        let service = service();
        let mut request = hackathon_request("Broken", 11);
        request.end_date = date(9, 1);

        assert!(service.create_hackathon(request).await.is_err());
        assert!(service.list_hackathons().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_team_before_deadline() {
        let service = service();
        let id = hackathon_id(&service).await;

        let team = service.create_team(&id, team_request("링크"), date(10, 5)).await.unwrap();
        assert_eq!(team.team_status, TeamStatus::Recruiting);
        assert_eq!(team.hackathon_id, id.to_hex());

        // 마감일 당일까지 허용
        assert!(service.create_team(&id, team_request("당일"), date(10, 20)).await.is_ok());
    }

    #[actix_web::test]
    async fn test_create_team_after_deadline_or_unknown_hackathon() {
        let service = service();
        let id = hackathon_id(&service).await;

        let late = service.create_team(&id, team_request("늦음"), date(10, 21)).await;
        assert!(matches!(late, Err(AppError::InvalidArgument(_))));

        let unknown = service.create_team(&ObjectId::new(), team_request("없음"), date(10, 1)).await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_teams_by_status() {
        let service = service();
        let id = hackathon_id(&service).await;
        let first = service.create_team(&id, team_request("첫째"), date(10, 1)).await.unwrap();
        service.create_team(&id, team_request("둘째"), date(10, 1)).await.unwrap();

        let first_id = ObjectId::parse_str(&first.team_id).unwrap();
        service.complete_recruitment(&first_id).await.unwrap();

        assert_eq!(service.list_teams(&id, None).await.unwrap().len(), 2);

        let recruiting = service.list_teams(&id, Some(TeamStatus::Recruiting)).await.unwrap();
        assert_eq!(recruiting.len(), 1);
        assert_eq!(recruiting[0].team_name, "둘째");

        let complete = service.list_teams(&id, Some(TeamStatus::Complete)).await.unwrap();
        assert_eq!(complete[0].team_id, first.team_id);
    }

    #[actix_web::test]
    async fn test_complete_recruitment_twice_conflicts() {
        let service = service();
        let id = hackathon_id(&service).await;
        let team = service.create_team(&id, team_request("완료"), date(10, 1)).await.unwrap();
        let team_id = ObjectId::parse_str(&team.team_id).unwrap();

        let completed = service.complete_recruitment(&team_id).await.unwrap();
        assert_eq!(completed.team_status, TeamStatus::Complete);

        let again = service.complete_recruitment(&team_id).await;
        assert!(matches!(again, Err(AppError::ConflictError(_))));

        let missing = service.complete_recruitment(&ObjectId::new()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
