use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 타임스탬프는 RFC 3339 문자열로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub learning_goals: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            skills,
            interests,
            learning_goals,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            skills,
            interests,
            learning_goals,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 목록 한 페이지
#[derive(Debug, Clone)]
pub struct UserPage {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub items: Vec<UserResponse>,
}
