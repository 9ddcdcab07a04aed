use std::sync::Arc;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
    repositories::stores::UserStore,
};

/// 캐시 유지 시간 (초)
const USER_CACHE_TTL: u64 = 600;

#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserRepository {
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let profile_index = IndexModel::builder()
            .keys(doc! { "name": 1, "birth": 1, "phone_number": 1 })
            .options(IndexOptions::builder()
                .name("profile_lookup".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, profile_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            log::debug!("사용자 캐시 적중: {}", id);
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": *id })
            .await?;

        if let Some(ref user) = user {
            if let Err(e) = self.redis.set_with_expiry(&cache_key, user, USER_CACHE_TTL).await {
                log::warn!("사용자 캐시 저장 실패: {}", e);
            }
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection::<User>()
            .find_one(doc! { "email": email })
            .await?)
    }

    async fn find_by_profile(&self, name: &str, birth: NaiveDate, phone_number: &str) -> AppResult<Option<User>> {
        Ok(self.collection::<User>()
            .find_one(doc! {
                "name": name,
                "birth": birth.to_string(),
                "phone_number": phone_number,
            })
            .await?)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let result = self.collection::<User>()
            .insert_one(&user)
            .await?;

        user.id = result.inserted_id.as_object_id();
        if user.id.is_none() {
            return Err(AppError::InternalError("삽입된 사용자 id를 확인할 수 없습니다".to_string()));
        }

        Ok(user)
    }

    async fn update_password(&self, id: &ObjectId, password_hash: String) -> AppResult<bool> {
        let result = self.collection::<User>()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": {
                    "password_hash": password_hash,
                    "updated_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
                } },
            )
            .await?;

        if result.matched_count > 0 {
            let _ = self.invalidate_cache(&id.to_hex()).await;
        }

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection::<User>()
            .delete_one(doc! { "_id": *id })
            .await?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(&id.to_hex()).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
