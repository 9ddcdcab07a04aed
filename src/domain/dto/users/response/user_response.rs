use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;

/// 내 정보 응답 (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub nickname: String,
    pub birth: NaiveDate,
    pub phone_number: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            nickname,
            birth,
            phone_number,
            auth_provider,
            roles,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            nickname,
            birth,
            phone_number,
            auth_provider,
            roles,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindEmailResponse {
    pub email: String,
}
