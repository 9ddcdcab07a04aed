//! # 해커톤/팀 HTTP 핸들러
//!
//! 해커톤 등록은 `/api/admin`, 나머지는 `/api/auth` 스코프에 걸립니다.

use actix_web::{get, patch, post, web, HttpResponse};
use chrono::Local;

use crate::core::errors::AppError;
use crate::domain::dto::teams::{CreateHackathonRequest, CreateTeamRequest, TeamListQuery};
use crate::domain::dto::tokens::ApiResponse;
use crate::handlers::parse_object_id;
use crate::services::teams::TeamService;

/// 해커톤 등록 (관리자)
#[post("/hackathons")]
pub async fn create_hackathon(payload: web::Json<CreateHackathonRequest>) -> Result<HttpResponse, AppError> {
    let hackathon = TeamService::instance().create_hackathon(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(hackathon)))
}

#[get("/hackathons")]
pub async fn list_hackathons() -> Result<HttpResponse, AppError> {
    let hackathons = TeamService::instance().list_hackathons().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(hackathons)))
}

#[get("/hackathons/{hackathon_id}")]
pub async fn get_hackathon(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let hackathon_id = parse_object_id(&path)?;

    let hackathon = TeamService::instance().get_hackathon(&hackathon_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(hackathon)))
}

/// `?status=RECRUITING|COMPLETE` 로 필터링
#[get("/hackathons/{hackathon_id}/teams")]
pub async fn list_teams(
    path: web::Path<String>,
    query: web::Query<TeamListQuery>,
) -> Result<HttpResponse, AppError> {
    let hackathon_id = parse_object_id(&path)?;

    let teams = TeamService::instance().list_teams(&hackathon_id, query.status).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(teams)))
}

#[post("/hackathons/{hackathon_id}/teams")]
pub async fn create_team(
    path: web::Path<String>,
    payload: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse, AppError> {
    let hackathon_id = parse_object_id(&path)?;
    let today = Local::now().date_naive();

    let team = TeamService::instance()
        .create_team(&hackathon_id, payload.into_inner(), today)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(team)))
}

#[patch("/teams/{team_id}/complete")]
pub async fn complete_recruitment(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let team_id = parse_object_id(&path)?;

    let team = TeamService::instance().complete_recruitment(&team_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(team)))
}
