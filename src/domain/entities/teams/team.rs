use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 팀 모집 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    Recruiting,
    Complete,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Recruiting => "RECRUITING",
            TeamStatus::Complete => "COMPLETE",
        }
    }
}

/// 해커톤에 속한 팀
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub hackathon_id: ObjectId,

    pub team_name: String,

    pub team_desc: String,

    pub max_team_member: u32,

    pub team_status: TeamStatus,
}

impl Team {
    /// 새 팀은 항상 모집 중 상태로 시작합니다.
    pub fn new(hackathon_id: ObjectId, team_name: String, team_desc: String, max_team_member: u32) -> Self {
        Self {
            id: None,
            hackathon_id,
            team_name,
            team_desc,
            max_team_member,
            team_status: TeamStatus::Recruiting,
        }
    }

    pub fn is_recruiting(&self) -> bool {
        self.team_status == TeamStatus::Recruiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_status_wire_format() {
        assert_eq!(serde_json::to_string(&TeamStatus::Recruiting).unwrap(), "\"RECRUITING\"");
        assert_eq!(TeamStatus::Complete.as_str(), "COMPLETE");
    }

    #[test]
    fn test_new_team_is_recruiting() {
        let team = Team::new(ObjectId::new(), "링크".to_string(), "백엔드 팀".to_string(), 4);
        assert!(team.is_recruiting());
    }
}
