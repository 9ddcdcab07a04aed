use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::teams::hackathon::Hackathon;
use crate::domain::entities::teams::team::{Team, TeamStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonResponse {
    pub hackathon_id: String,
    pub hackathon_name: String,
    pub register_date: NaiveDate,
    pub team_deadline_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_point: u32,
}

impl From<Hackathon> for HackathonResponse {
    fn from(hackathon: Hackathon) -> Self {
        Self {
            hackathon_id: hackathon.id.map(|id| id.to_hex()).unwrap_or_default(),
            hackathon_name: hackathon.hackathon_name,
            register_date: hackathon.register_date,
            team_deadline_date: hackathon.team_deadline_date,
            start_date: hackathon.start_date,
            end_date: hackathon.end_date,
            max_point: hackathon.max_point,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_id: String,
    pub hackathon_id: String,
    pub team_name: String,
    pub team_desc: String,
    pub max_team_member: u32,
    pub team_status: TeamStatus,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            team_id: team.id.map(|id| id.to_hex()).unwrap_or_default(),
            hackathon_id: team.hackathon_id.to_hex(),
            team_name: team.team_name,
            team_desc: team.team_desc,
            max_team_member: team.max_team_member,
            team_status: team.team_status,
        }
    }
}
