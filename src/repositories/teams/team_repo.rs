use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    core::errors::AppResult,
    db::Database,
    domain::entities::teams::team::{Team, TeamStatus},
    repositories::stores::TeamStore,
};

#[repository(name = "team", collection = "teams")]
pub struct TeamRepository {
    db: Arc<Database>,
}

impl TeamRepository {
    pub async fn create_indexes(&self) -> AppResult<()> {
        let hackathon_index = IndexModel::builder()
            .keys(doc! { "hackathon_id": 1, "team_status": 1 })
            .options(IndexOptions::builder().name("hackathon_status_idx".to_string()).build())
            .build();

        self.collection::<Team>()
            .create_index(hackathon_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TeamStore for TeamRepository {
    async fn create(&self, mut team: Team) -> AppResult<Team> {
        let result = self.collection::<Team>()
            .insert_one(&team)
            .await?;

        team.id = result.inserted_id.as_object_id();
        Ok(team)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Team>> {
        Ok(self.collection::<Team>()
            .find_one(doc! { "_id": *id })
            .await?)
    }

    async fn find_by_hackathon(&self, hackathon_id: &ObjectId, status: Option<TeamStatus>) -> AppResult<Vec<Team>> {
        let mut filter = doc! { "hackathon_id": *hackathon_id };
        if let Some(status) = status {
            filter.insert("team_status", status.as_str());
        }

        let cursor = self.collection::<Team>()
            .find(filter)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_status(&self, id: &ObjectId, status: TeamStatus) -> AppResult<bool> {
        let result = self.collection::<Team>()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "team_status": status.as_str() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
