//! # 사용자 요청 본문 검증
//!
//! 저장소에 접근하기 전에 원시 JSON 본문의 형태와 타입을 검사합니다.
//! 타입이 맞지 않는 값(숫자 이름, 문자열이 섞인 배열 등)은 구조체로
//! 역직렬화하기 전에 걸러야 하므로 `serde_json::Value`를 직접 검사합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 생성 | 수정 |
//! |------|------|------|
//! | `name` | 필수, 공백 아닌 문자열 | 있으면 공백 아닌 문자열 |
//! | `email` | 필수, 공백 아닌 문자열 | 있으면 공백 아닌 문자열 |
//! | `skills` / `interests` / `learningGoals` | 있으면 문자열 배열 | 있으면 문자열 배열 |
//!
//! 모든 위반 사항을 한 번에 수집하여 반환합니다.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::users::user::{NewUser, UserPatch};
use crate::utils::string_utils::is_valid_string;

/// 문자열 배열로 검증되는 필드 (JSON 필드명)
const STRING_LIST_FIELDS: [&str; 3] = ["skills", "interests", "learningGoals"];

/// 검증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    /// `POST /api/users` - name, email 필수
    Create,
    /// `PUT /api/users/{id}` - 모든 필드 선택
    Update,
}

/// 원시 요청 본문 검증
///
/// 입력을 변경하지 않고 저장소에도 접근하지 않습니다.
/// 객체가 아닌 본문은 빈 객체로 취급합니다.
///
/// # 반환값
///
/// * `Ok(())` - 유효한 본문
/// * `Err(Vec<String>)` - 필드 순서(name, email, skills, interests, learningGoals)대로 정렬된 에러 메시지
///
/// # 예제
///
/// ```rust,ignore
/// let payload = serde_json::json!({ "email": "t@example.com", "skills": [1] });
/// let errors = validate_user_payload(&payload, PayloadMode::Create).unwrap_err();
/// assert_eq!(errors, vec!["name is required", "skills must be an array of strings"]);
/// ```
pub fn validate_user_payload(payload: &Value, mode: PayloadMode) -> Result<(), Vec<String>> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    for field in ["name", "email"] {
        let value = fields.get(field);
        match mode {
            PayloadMode::Create => {
                if !is_non_empty_string(value) {
                    errors.push(format!("{} is required", field));
                }
            }
            PayloadMode::Update => {
                if value.is_some() && !is_non_empty_string(value) {
                    errors.push(format!("{} must be a non-empty string", field));
                }
            }
        }
    }

    for field in STRING_LIST_FIELDS {
        if !is_string_array(fields.get(field)) {
            errors.push(format!("{} must be an array of strings", field));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if is_valid_string(s))
}

/// 필드가 없거나, 모든 원소가 문자열인 배열인 경우 `true`
fn is_string_array(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::Array(items)) => items.iter().all(Value::is_string),
        Some(_) => false,
    }
}

/// 사용자 생성 요청 DTO
///
/// `validate_user_payload(.., PayloadMode::Create)`를 통과한 본문에서 만들어집니다.
/// 알 수 없는 필드는 무시됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub learning_goals: Option<Vec<String>>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            skills: request.skills.unwrap_or_default(),
            interests: request.interests.unwrap_or_default(),
            learning_goals: request.learning_goals.unwrap_or_default(),
        }
    }
}

/// 사용자 수정 요청 DTO
///
/// 허용된 필드만 선언되어 있으므로 그 외 필드(`_id`, `createdAt` 등)는
/// 역직렬화 단계에서 조용히 버려집니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub learning_goals: Option<Vec<String>>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            skills: request.skills,
            interests: request.interests,
            learning_goals: request.learning_goals,
        }
    }
}
