//! User Entity Implementation
//!
//! 사용자 프로필 엔티티와 생성/수정 입력 모델입니다.
//! 정규화(`normalized`)와 레코드 제약 검증(`check_constraints`)은 저장소가
//! 생성과 수정 양쪽에서 명시적으로 호출합니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::string_utils::{normalize_email, normalize_string_list, trim_string};

/// 기본 이메일 형식: 공백 없이 `local@domain.tld`
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern must compile"));

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 문서 형태 그대로입니다.
/// 필드명은 camelCase로 저장됩니다 (`learningGoals`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 정규화된 이메일 (unique)
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub learning_goals: Vec<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 정규화된 입력으로 새 엔티티를 만듭니다. ID는 저장소가 할당합니다.
    pub fn from_new(new_user: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: new_user.name,
            email: new_user.email,
            skills: new_user.skills,
            interests: new_user.interests,
            learning_goals: new_user.learning_goals,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 부분 수정을 적용합니다.
    ///
    /// `patch`에 값이 있는 필드만 덮어쓰고 `updated_at`을 갱신합니다.
    /// `patch`는 이미 정규화되어 있어야 합니다.
    pub fn apply_patch(&mut self, patch: UserPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }
        if let Some(learning_goals) = patch.learning_goals {
            self.learning_goals = learning_goals;
        }
        self.updated_at = now;
    }
}

/// 새 사용자 입력
///
/// 검증된 요청 DTO에서 만들어지며, 저장 직전에 `normalized()` 후
/// `check_constraints()`를 거칩니다.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewUser {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    #[validate(custom(function = "validate_required_name"))]
    pub name: String,

    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub learning_goals: Vec<String>,
}

impl NewUser {
    /// 이름/이메일 트림, 이메일 소문자화, 문자열 목록 정규화
    pub fn normalized(self) -> Self {
        Self {
            name: trim_string(&self.name),
            email: normalize_email(&self.email),
            skills: normalize_string_list(self.skills),
            interests: normalize_string_list(self.interests),
            learning_goals: normalize_string_list(self.learning_goals),
        }
    }

    /// 레코드 제약 검증 (길이, 이메일 형식)
    pub fn check_constraints(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|errors| constraint_messages(&errors))
    }
}

/// 부분 수정 입력
///
/// 허용된 필드(name, email, skills, interests, learningGoals)만 가지며
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UserPatch {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    #[validate(custom(function = "validate_required_name"))]
    pub name: Option<String>,

    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    #[validate(custom(function = "validate_email_format"))]
    pub email: Option<String>,

    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub learning_goals: Option<Vec<String>>,
}

impl UserPatch {
    /// 생성 경로와 동일한 정규화를 수정 경로에도 적용합니다.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.as_deref().map(trim_string),
            email: self.email.as_deref().map(normalize_email),
            skills: self.skills.map(normalize_string_list),
            interests: self.interests.map(normalize_string_list),
            learning_goals: self.learning_goals.map(normalize_string_list),
        }
    }

    /// 레코드 제약 검증 (값이 있는 필드만)
    pub fn check_constraints(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|errors| constraint_messages(&errors))
    }

    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.skills.is_none()
            && self.interests.is_none()
            && self.learning_goals.is_none()
    }
}

fn validate_required_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("required").with_message("Name is required".into()));
    }
    Ok(())
}

fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("required").with_message("Email is required".into()));
    }
    if EMAIL_PATTERN.is_match(email) {
        return Ok(());
    }
    Err(ValidationError::new("email_format")
        .with_message("Please provide a valid email address".into()))
}

/// `ValidationErrors`를 필드 순서(name, email)대로 메시지 목록으로 펼칩니다.
fn constraint_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().cloned().collect();
    fields.sort_by_key(|field| match field.as_ref() {
        "name" => 0,
        "email" => 1,
        _ => 2,
    });

    fields
        .iter()
        .filter_map(|field| field_errors.get(field))
        .flat_map(|errors| errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("{} is invalid", error.code))
        })
        .collect()
}
