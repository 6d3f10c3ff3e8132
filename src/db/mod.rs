//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI (트랜잭션을 쓰려면 레플리카 셋이어야 합니다)
//! export MONGODB_URI="mongodb://host:27017/?replicaSet=rs0"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="member_service"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::repositories::mongo::MongoStorage;
//!
//! let database = Arc::new(Database::new().await?);
//! let storage = MongoStorage::new(database);
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 묶어 저장소 계층에 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (세션/트랜잭션 시작에 사용)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 새 MongoDB 연결을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "member_service_dev")
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), DatabaseConfig::database_name()).await
    }

    /// 주어진 URI와 데이터베이스 이름으로 연결하고 ping으로 연결 상태를 검증합니다.
    pub async fn connect(uri: &str, database_name: String) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("member_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 컬렉션 접근에 사용하는 `mongodb::Database`를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
