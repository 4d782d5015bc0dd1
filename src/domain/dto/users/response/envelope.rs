//! 공통 응답 envelope
//!
//! 성공 응답은 모두 `{ "success": true, ... }` 형태를 따릅니다.
//! 실패 응답은 `AppError`의 `ResponseError` 구현이 만듭니다.

use serde::{Deserialize, Serialize};

use super::user_response::UserPage;
use super::UserResponse;

/// `{ success: true, data }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

/// `{ success: true, page, limit, total, data: [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub data: Vec<T>,
}

impl From<UserPage> for PaginatedResponse<UserResponse> {
    fn from(page: UserPage) -> Self {
        Self {
            success: true,
            page: page.page,
            limit: page.limit,
            total: page.total,
            data: page.items,
        }
    }
}

/// `{ success, message }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
