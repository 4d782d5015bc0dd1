//! 사용자 관리 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB 연결을 확인한 뒤, 저장소와 서비스를 한 번 생성하여
//! Actix-web HTTP 서버에 주입합니다. 저장소 연결이 확인되기 전에는
//! 요청을 받지 않습니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_management_service::config::AppConfig;
use user_management_service::db::Database;
use user_management_service::repositories::users::{MongoUserRepository, UserStore};
use user_management_service::routes::{configure_all_routes, route_not_found};
use user_management_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중...");

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        error!("❌ 설정 로드 실패: {}", e);
        std::process::exit(1);
    });
    info!("📦 데이터베이스: {}", config.database_name);

    // 저장소 초기화 (연결 + 인덱스)
    let store = initialize_store(&config).await;
    let user_service = web::Data::new(UserService::new(store));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    user_service: web::Data<UserService>,
) -> std::io::Result<()> {
    let bind_address = (config.host.clone(), config.port);

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", config.host, config.port);
    info!("📍 Health check: http://{}:{}/health", config.host, config.port);
    info!("📍 API: http://{}:{}/api/users", config.host, config.port);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .unwrap_or_else(|| {
            error!(
                "❌ Rate Limiting 설정이 올바르지 않습니다: {:?}",
                config.rate_limit
            );
            std::process::exit(1);
        });

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let cors_origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 서비스 주입
            .app_data(user_service.clone())
            // 라우트 설정
            .configure(configure_all_routes)
            .default_service(web::to(route_not_found))
    })
    .bind(bind_address)?
    .workers(config.http_workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로깅 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (.env 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_management_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 연결과 인덱스를 준비하고 주입할 저장소를 반환합니다
///
/// 연결 또는 인덱스 생성에 실패하면 프로세스를 종료합니다.
async fn initialize_store(config: &AppConfig) -> Arc<dyn UserStore> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.mongo_uri, &config.database_name)
        .await
        .unwrap_or_else(|e| {
            error!("❌ MongoDB 연결 실패: {}", e);
            std::process::exit(1);
        });

    let repository = MongoUserRepository::new(&database);
    if let Err(e) = repository.create_indexes().await {
        error!("❌ 인덱스 생성 실패 ({}): {}", database.database_name(), e);
        std::process::exit(1);
    }

    Arc::new(repository)
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin 목록이 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
