use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::reservations::reservation::Reservation,
    repositories::stores::ReservationStore,
};

#[repository(name = "reservation", collection = "reservations")]
pub struct ReservationRepository {
    db: Arc<Database>,
}

impl ReservationRepository {
    /// 참여자별 조회용 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let leader_index = IndexModel::builder()
            .keys(doc! { "leader": 1 })
            .options(IndexOptions::builder().name("leader_idx".to_string()).build())
            .build();

        let member_index = IndexModel::builder()
            .keys(doc! { "member": 1 })
            .options(IndexOptions::builder().name("member_idx".to_string()).build())
            .build();

        self.collection::<Reservation>()
            .create_indexes([leader_index, member_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn find_by_leader_or_member(&self, user_id: &ObjectId) -> AppResult<Vec<Reservation>> {
        let cursor = self.collection::<Reservation>()
            .find(doc! {
                "$or": [
                    { "leader": *user_id },
                    { "member": *user_id },
                ]
            })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Reservation>> {
        Ok(self.collection::<Reservation>()
            .find_one(doc! { "_id": *id })
            .await?)
    }

    async fn save(&self, mut reservation: Reservation) -> AppResult<Reservation> {
        match reservation.id {
            Some(id) => {
                let result = self.collection::<Reservation>()
                    .replace_one(doc! { "_id": id }, &reservation)
                    .await?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound("예약을 찾을 수 없습니다".to_string()));
                }
            }
            None => {
                let result = self.collection::<Reservation>()
                    .insert_one(&reservation)
                    .await?;

                reservation.id = result.inserted_id.as_object_id();
            }
        }

        Ok(reservation)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection::<Reservation>()
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
