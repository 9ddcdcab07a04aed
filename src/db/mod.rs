//! MongoDB 연결 관리
//!
//! 기동 시 한 번 연결해 `ServiceLocator`에 등록하고,
//! `#[repository]` 리포지토리들이 `db` 필드로 주입받아 컬렉션에 접근합니다.

use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;

/// MongoDB 클라이언트와 데이터베이스 이름을 묶은 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 연결 후 `ping`으로 도달 가능 여부를 확인합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some("link_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
