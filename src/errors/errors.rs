//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! 한 곳에서 HTTP 응답으로 변환합니다. 핸들러는 에러 본문을 직접 만들지 않습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | message |
//! |----------|-------------|---------|
//! | `ValidationError` | 400 | `Validation failed` (+ `errors`) |
//! | `InvalidId` | 400 | `Invalid user id` |
//! | `NotFound` | 404 | `User not found` |
//! | `RouteNotFound` | 404 | `Route not found` |
//! | `DuplicateKey` | 409 | `Duplicate value for: <fields>` |
//! | `PayloadTooLarge` | 413 | `Request body is too large` |
//! | `DatabaseError` / `InternalError` | 500 | `Internal server error` |
//!
//! 5xx 응답에는 드라이버 메시지나 내부 정보를 절대 싣지 않고 서버 로그에만 남깁니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repositories::users::user_store::StoreError;

/// 5xx 응답에 사용하는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    /// 잘못된 ID 형식 (400 Bad Request)
    #[error("Invalid user id")]
    InvalidId,

    /// 사용자 없음 (404 Not Found)
    #[error("User not found")]
    NotFound,

    /// 매칭되는 라우트 없음 (404 Not Found)
    #[error("Route not found")]
    RouteNotFound,

    /// 유니크 제약 위반 (409 Conflict)
    #[error("{}", duplicate_message(.0))]
    DuplicateKey(Vec<String>),

    /// 요청 본문 크기 초과 (413 Payload Too Large)
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn duplicate_message(fields: &[String]) -> String {
    if fields.is_empty() {
        "Duplicate key error".to_string()
    } else {
        format!("Duplicate value for: {}", fields.join(", "))
    }
}

/// 실패 응답 본문
///
/// ```json
/// { "success": false, "message": "Validation failed", "errors": ["name is required"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl AppError {
    /// 클라이언트에게 노출해도 되는 메시지
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(_) => "Validation failed".to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// 응답 본문 생성
    pub fn body(&self) -> ErrorBody {
        let errors = match self {
            AppError::ValidationError(errors) => Some(errors.clone()),
            _ => None,
        };

        ErrorBody {
            success: false,
            message: self.public_message(),
            errors,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 상세 내용을 로그에 남기고 본문에는 고정 메시지만 담습니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(self.body())
    }
}

/// 저장소 실패를 API 에러로 변환합니다. 모든 변형을 빠짐없이 매칭합니다.
impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::InvalidId => AppError::InvalidId,
            StoreError::NotFound => AppError::NotFound,
            StoreError::DuplicateKey(fields) => AppError::DuplicateKey(fields),
            StoreError::Constraint(messages) => AppError::ValidationError(messages),
            StoreError::Backend(message) => AppError::DatabaseError(message),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
