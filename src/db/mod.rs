//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결은 `main`에서 한 번 생성되고, 리포지토리는 여기서 컬렉션 핸들을 얻습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.mongo_uri, &config.database_name).await?;
//! let repo = MongoUserRepository::new(&database);
//! ```

use std::time::Duration;

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

/// 클라이언트 식별 이름 (서버 로그/모니터링용)
const APP_NAME: &str = "user-management-service";

/// 연결 불가 시 시작을 오래 붙잡지 않도록 서버 선택 대기 시간을 제한합니다.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부 연결 풀 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// MongoDB에 연결하고 `ping`으로 연결 상태를 확인합니다.
    ///
    /// # 인자
    ///
    /// * `uri` - MongoDB 연결 URI
    /// * `database_name` - 사용할 데이터베이스 이름
    ///
    /// # 반환값
    ///
    /// * `Ok(Database)` - ping까지 성공한 연결
    /// * `Err(mongodb::error::Error)` - URI 파싱 실패 또는 서버 연결 불가
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some(APP_NAME.to_string());
        client_options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
