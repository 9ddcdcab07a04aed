use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 해커톤
///
/// 날짜는 `register_date ≤ team_deadline_date ≤ start_date ≤ end_date` 순서를 지킵니다.
/// 팀 생성은 `team_deadline_date`까지만 가능합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hackathon {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub hackathon_name: String,

    pub register_date: NaiveDate,

    pub team_deadline_date: NaiveDate,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub max_point: u32,
}

impl Hackathon {
    pub fn has_valid_schedule(&self) -> bool {
        self.register_date <= self.team_deadline_date
            && self.team_deadline_date <= self.start_date
            && self.start_date <= self.end_date
    }

    pub fn accepts_teams_on(&self, today: NaiveDate) -> bool {
        today <= self.team_deadline_date
    }
}
