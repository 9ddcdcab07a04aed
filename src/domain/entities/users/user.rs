//! 사용자 엔티티

use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 사용자 계정
///
/// 로컬 계정은 bcrypt 해시를 가지며, 소셜 계정은 `password_hash`가 비어 있습니다.
/// 다른 엔티티는 사용자를 `id`로만 참조합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 로그인 식별자 (unique)
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    pub name: String,

    pub nickname: String,

    pub birth: NaiveDate,

    pub phone_number: String,

    pub auth_provider: AuthProvider,

    /// 기본값 `["user"]`, 운영자는 `"admin"` 추가
    pub roles: Vec<String>,

    pub is_active: bool,

    pub is_email_verified: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 이메일 인증을 마친 로컬 계정 생성
    pub fn new_local(
        email: String,
        password_hash: String,
        name: String,
        nickname: String,
        birth: NaiveDate,
        phone_number: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            email,
            password_hash: Some(password_hash),
            name,
            nickname,
            birth,
            phone_number,
            auth_provider: AuthProvider::Local,
            roles: vec!["user".to_string()],
            is_active: true,
            is_email_verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 소셜 로그인으로 생성된 계정 (비밀번호 없음)
    pub fn new_social(
        email: String,
        name: String,
        nickname: String,
        birth: NaiveDate,
        phone_number: String,
        auth_provider: AuthProvider,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            email,
            password_hash: None,
            name,
            nickname,
            birth,
            phone_number,
            auth_provider,
            roles: vec!["user".to_string()],
            is_active: true,
            is_email_verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local)
    }

    /// 비밀번호 로그인이 가능한 계정인지 (로컬 + 해시 보유)
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }

    pub fn with_role(mut self, role: &str) -> Self {
        if !self.roles.iter().any(|r| r == role) {
            self.roles.push(role.to_string());
        }
        self
    }
}
