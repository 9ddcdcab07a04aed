use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::teams::team::TeamStatus;

/// 해커톤 등록 (관리자)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_schedule_order"))]
pub struct CreateHackathonRequest {
    #[validate(length(min = 1, max = 50, message = "해커톤 이름은 1-50자 사이여야 합니다"))]
    pub hackathon_name: String,

    pub register_date: NaiveDate,

    pub team_deadline_date: NaiveDate,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(range(min = 1, message = "최대 점수는 1 이상이어야 합니다"))]
    pub max_point: u32,
}

fn validate_schedule_order(req: &CreateHackathonRequest) -> Result<(), ValidationError> {
    let ordered = req.register_date <= req.team_deadline_date
        && req.team_deadline_date <= req.start_date
        && req.start_date <= req.end_date;

    if !ordered {
        return Err(ValidationError::new("invalid_schedule")
            .with_message("등록일, 팀 마감일, 시작일, 종료일 순서가 올바르지 않습니다".into()));
    }
    Ok(())
}

/// 팀 생성
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 30, message = "팀 이름은 1-30자 사이여야 합니다"))]
    pub team_name: String,

    #[validate(length(max = 500, message = "팀 소개는 500자 이하여야 합니다"))]
    pub team_desc: String,

    #[validate(range(min = 2, max = 10, message = "팀 인원은 2-10명 사이여야 합니다"))]
    pub max_team_member: u32,
}

/// 팀 목록 필터 (`?status=RECRUITING`)
#[derive(Debug, Clone, Deserialize)]
pub struct TeamListQuery {
    pub status: Option<TeamStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_schedule_must_be_ordered() {
        let mut req = CreateHackathonRequest {
            hackathon_name: "Link Hackathon".to_string(),
            register_date: date(10, 1),
            team_deadline_date: date(10, 20),
            start_date: date(11, 1),
            end_date: date(11, 3),
            max_point: 100,
        };
        assert!(req.validate().is_ok());

        req.team_deadline_date = date(11, 2);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_team_size_bounds() {
        let req = CreateTeamRequest {
            team_name: "혼자".to_string(),
            team_desc: String::new(),
            max_team_member: 1,
        };
        assert!(req.validate().is_err());
    }
}
