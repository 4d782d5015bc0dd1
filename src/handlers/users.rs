//! # User Management HTTP Handlers
//!
//! 사용자 프로필 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 추출과 응답 envelope 구성만 담당하고, 검증과 저장은
//! 주입된 [`UserService`]에 위임합니다. 에러 본문은 `AppError`가 만듭니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 사용자 생성 | 201 / 400 / 409 / 413 |
//! | `GET` | `/api/users?page=&limit=` | 목록 조회 (페이징) | 200 |
//! | `GET` | `/api/users/{id}` | 단건 조회 | 200 / 400 / 404 |
//! | `PUT` | `/api/users/{id}` | 부분 수정 | 200 / 400 / 404 / 409 / 413 |
//! | `DELETE` | `/api/users/{id}` | 삭제 | 200 / 400 / 404 |
//!
//! ## 요청 본문
//!
//! 본문은 `serde_json::Value`로 받습니다. 숫자 이름이나 문자열이 섞인 배열 같은
//! 타입 오류도 400 `Validation failed`와 필드별 메시지로 돌려주기 위해서입니다.
//! JSON으로 파싱할 수 없는 본문은 [`json_config`]의 에러 핸들러가 처리합니다.

use actix_web::error::JsonPayloadError;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::domain::dto::users::request::{ListUsersQuery, PageRequest};
use crate::domain::dto::users::response::{ApiResponse, MessageResponse, PaginatedResponse};
use crate::errors::AppError;
use crate::services::users::UserService;

/// JSON 파싱 실패 시 응답 메시지
pub const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON";

/// 요청 본문 최대 크기 (100 KiB)
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// 사용자 API 전용 JSON 추출 설정
///
/// 크기 초과는 413, 그 밖의 파싱 실패(잘못된 JSON, 빈 본문, Content-Type 불일치)는
/// 400 `Validation failed`로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            log::debug!("JSON 본문 파싱 실패: {}", err);
            match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::PayloadTooLarge.into()
                }
                _ => AppError::ValidationError(vec![INVALID_JSON_MESSAGE.to_string()]).into(),
            }
        })
}

/// 사용자 생성
///
/// # 요청 예제
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Test User","email":"t@example.com","skills":["js"]}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(user)))
}

/// 사용자 목록 조회
///
/// 쿼리 값은 관대하게 해석합니다. 숫자로 읽을 수 없는 값은 기본값
/// (`page=1`, `limit=20`)이 되고, 범위를 벗어난 값은 경계로 보정됩니다.
/// `page`와 `limit`은 서로 독립적으로 해석되며, 반복된 키는 첫 값을 씁니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|pairs| ListUsersQuery::from_pairs(pairs.into_inner()))
        .unwrap_or_default();

    let page = service.list_users(PageRequest::from(query)).await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::from(page)))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user)))
}

/// 사용자 부분 수정
///
/// 허용된 필드 중 본문에 있는 값만 변경합니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::ok("User deleted")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::repositories::users::memory_store::InMemoryUserRepository;
    use crate::routes::{configure_all_routes, route_not_found};

    use super::*;

    macro_rules! test_app {
        () => {{
            let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
            test::init_service(
                App::new()
                    .app_data(web::Data::new(service))
                    .configure(configure_all_routes)
                    .default_service(web::to(route_not_found)),
            )
            .await
        }};
    }

    async fn body_json(response: ServiceResponse) -> Value {
        test::read_body_json(response).await
    }

    fn post_user(body: Value) -> test::TestRequest {
        test::TestRequest::post().uri("/api/users").set_json(body)
    }

    #[actix_web::test]
    async fn test_end_to_end_lifecycle() {
        let app = test_app!();

        // 생성
        let response = test::call_service(
            &app,
            post_user(json!({
                "name": "Test User",
                "email": "t@example.com",
                "skills": ["js"],
                "interests": [],
                "learningGoals": ["testing"]
            })).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["success"], true);
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["learningGoals"], json!(["testing"]));
        assert!(created["data"]["createdAt"].is_string());

        // 목록에 포함
        let request = test::TestRequest::get().uri("/api/users").to_request();
        let listed = body_json(test::call_service(&app, request).await).await;
        assert_eq!(listed["total"], 1);
        assert_eq!(listed["page"], 1);
        assert_eq!(listed["limit"], 20);
        assert_eq!(listed["data"][0]["id"], id.as_str());

        // skills 수정
        let request = test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({ "skills": ["js", "node"] }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["data"]["skills"], json!(["js", "node"]));
        assert_eq!(updated["data"]["name"], "Test User");

        // 삭제
        let request = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "message": "User deleted" })
        );

        // 삭제 후 조회
        let request = test::TestRequest::get()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "User not found" })
        );
    }

    #[actix_web::test]
    async fn test_create_validation_failure_lists_errors() {
        let app = test_app!();

        let response = test::call_service(&app, post_user(json!({ "skills": [1, 2] })).to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "message": "Validation failed",
                "errors": [
                    "name is required",
                    "email is required",
                    "skills must be an array of strings"
                ]
            })
        );
    }

    #[actix_web::test]
    async fn test_malformed_json_body() {
        let app = test_app!();

        let request = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"], json!([INVALID_JSON_MESSAGE]));
    }

    #[actix_web::test]
    async fn test_body_size_limit() {
        let app = test_app!();

        // 기본 32KB 한도보다 크지만 100KB 이내
        let skills = vec!["x".repeat(1000); 50];
        let request = post_user(json!({ "name": "A", "email": "a@example.com", "skills": skills }));
        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let skills = vec!["x".repeat(1000); 120];
        let request = post_user(json!({ "name": "B", "email": "b@example.com", "skills": skills }));
        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "Request body is too large" })
        );
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflict() {
        let app = test_app!();

        let first = test::call_service(
            &app,
            post_user(json!({ "name": "A", "email": "same@example.com" })).to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = test::call_service(
            &app,
            post_user(json!({ "name": "B", "email": "  SAME@example.com " })).to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(second).await,
            json!({ "success": false, "message": "Duplicate value for: email" })
        );
    }

    #[actix_web::test]
    async fn test_distinct_emails_get_unique_ids() {
        let app = test_app!();
        let mut ids = Vec::new();

        for i in 0..3 {
            let response = test::call_service(
                &app,
                post_user(json!({ "name": "User", "email": format!("u{}@example.com", i) })).to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
            ids.push(body_json(response).await["data"]["id"].as_str().unwrap().to_string());
        }

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[actix_web::test]
    async fn test_invalid_and_unknown_ids() {
        let app = test_app!();

        for request in [
            test::TestRequest::get().uri("/api/users/123").to_request(),
            test::TestRequest::delete().uri("/api/users/not-an-id").to_request(),
            test::TestRequest::put()
                .uri("/api/users/123")
                .set_json(json!({ "name": "X" }))
                .to_request(),
        ] {
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({ "success": false, "message": "Invalid user id" })
            );
        }

        let request = test::TestRequest::get()
            .uri("/api/users/507f1f77bcf86cd799439011")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_pagination_clamps() {
        let app = test_app!();
        for i in 0..3 {
            test::call_service(
                &app,
                post_user(json!({ "name": "User", "email": format!("u{}@example.com", i) })).to_request(),
            )
            .await;
        }

        let cases = [
            ("/api/users?limit=0", 1, 1),
            ("/api/users?limit=1000", 1, 100),
            ("/api/users?page=0&limit=2", 1, 2),
            ("/api/users?page=-4", 1, 20),
            ("/api/users?page=abc&limit=xyz", 1, 20),
        ];
        for (uri, page, limit) in cases {
            let request = test::TestRequest::get().uri(uri).to_request();
            let body = body_json(test::call_service(&app, request).await).await;
            assert_eq!(body["page"], page, "{}", uri);
            assert_eq!(body["limit"], limit, "{}", uri);
            assert_eq!(body["total"], 3, "{}", uri);
        }

        let request = test::TestRequest::get().uri("/api/users?page=2&limit=2").to_request();
        let body = body_json(test::call_service(&app, request).await).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_list_query_keys_are_independent() {
        let app = test_app!();
        for i in 0..6 {
            test::call_service(
                &app,
                post_user(json!({ "name": "User", "email": format!("u{}@example.com", i) })).to_request(),
            )
            .await;
        }

        let cases = [
            ("/api/users?page=2&limit=5&page=3", 2, 5, 1),
            ("/api/users?page=abc&limit=5", 1, 5, 5),
            ("/api/users?page=2&limit=%zz", 2, 20, 0),
        ];
        for (uri, page, limit, items) in cases {
            let request = test::TestRequest::get().uri(uri).to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            let body = body_json(response).await;
            assert_eq!(body["page"], page, "{}", uri);
            assert_eq!(body["limit"], limit, "{}", uri);
            assert_eq!(body["data"].as_array().unwrap().len(), items, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_huge_page_returns_empty_page() {
        let app = test_app!();
        test::call_service(&app, post_user(json!({ "name": "A", "email": "a@example.com" })).to_request()).await;

        let request = test::TestRequest::get()
            .uri("/api/users?page=9223372036854775807")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_repeated_update_is_idempotent() {
        let app = test_app!();
        let created = body_json(
            test::call_service(&app, post_user(json!({ "name": "A", "email": "a@example.com" })).to_request())
                .await,
        )
        .await;
        let uri = format!("/api/users/{}", created["data"]["id"].as_str().unwrap());
        let patch = json!({ "interests": [" rust ", ""], "role": "admin" });

        let mut results = Vec::new();
        for _ in 0..2 {
            let request = test::TestRequest::put().uri(&uri).set_json(patch.clone()).to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
            results.push(body_json(response).await["data"].clone());
        }

        assert_eq!(results[0]["interests"], json!(["rust"]));
        assert_eq!(results[0]["interests"], results[1]["interests"]);
        assert!(results[1].get("role").is_none());
    }

    #[actix_web::test]
    async fn test_update_email_conflict() {
        let app = test_app!();
        test::call_service(&app, post_user(json!({ "name": "A", "email": "a@example.com" })).to_request()).await;
        let b = body_json(
            test::call_service(&app, post_user(json!({ "name": "B", "email": "b@example.com" })).to_request())
                .await,
        )
        .await;

        let request = test::TestRequest::put()
            .uri(&format!("/api/users/{}", b["data"]["id"].as_str().unwrap()))
            .set_json(json!({ "email": "A@EXAMPLE.COM" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_unmatched_route() {
        let app = test_app!();

        let request = test::TestRequest::get().uri("/api/unknown").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "Route not found" })
        );
    }
}
