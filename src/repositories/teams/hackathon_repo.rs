use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use singleton_macro::repository;

use crate::{
    core::errors::AppResult,
    db::Database,
    domain::entities::teams::hackathon::Hackathon,
    repositories::stores::HackathonStore,
};

#[repository(name = "hackathon", collection = "hackathons")]
pub struct HackathonRepository {
    db: Arc<Database>,
}

#[async_trait]
impl HackathonStore for HackathonRepository {
    async fn create(&self, mut hackathon: Hackathon) -> AppResult<Hackathon> {
        let result = self.collection::<Hackathon>()
            .insert_one(&hackathon)
            .await?;

        hackathon.id = result.inserted_id.as_object_id();
        Ok(hackathon)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Hackathon>> {
        Ok(self.collection::<Hackathon>()
            .find_one(doc! { "_id": *id })
            .await?)
    }

    async fn find_all(&self) -> AppResult<Vec<Hackathon>> {
        let cursor = self.collection::<Hackathon>()
            .find(doc! {})
            .sort(doc! { "start_date": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}
