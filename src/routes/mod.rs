//! API 라우트 설정 모듈
//!
//! 헬스체크와 사용자 API 엔드포인트를 애플리케이션에 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `/api/users` - 사용자 CRUD ([`handlers::users`])
//! - 그 외 모든 경로 - 404 `Route not found` ([`route_not_found`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes)
//!     .default_service(web::to(route_not_found));
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 헬스체크 응답의 서비스 이름
pub const SERVICE_NAME: &str = "user-management-service";

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/users` - 사용자 생성
/// - `GET /api/users` - 사용자 목록 조회 (`page`, `limit`)
/// - `GET /api/users/{id}` - 사용자 조회
/// - `PUT /api/users/{id}` - 사용자 부분 수정
/// - `DELETE /api/users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Test User","email":"t@example.com"}'
///
/// curl "http://localhost:5000/api/users?page=2&limit=10"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .app_data(handlers::users::json_config())
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소 상태와 무관하게 프로세스가 요청을 받을 수 있으면 200을 반환합니다.
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "ok",
///   "service": "user-management-service",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 매칭되는 라우트가 없을 때 사용하는 기본 핸들러
pub async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::RouteNotFound)
}
