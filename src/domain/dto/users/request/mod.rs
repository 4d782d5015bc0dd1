//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리를 검증하고
//! 구조화된 Rust 타입으로 변환하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **형태 검증** ([`user_payload`]): 원시 JSON의 필수 필드와 타입
//! 2. **레코드 제약** (엔티티 `check_constraints`): 길이, 이메일 형식
//! 3. **유일성**: 저장소의 유니크 인덱스
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::{validate_user_payload, PayloadMode, CreateUserRequest};
//!
//! validate_user_payload(&payload, PayloadMode::Create)
//!     .map_err(AppError::ValidationError)?;
//! let request: CreateUserRequest = serde_json::from_value(payload)?;
//! ```

pub mod list_users;
pub mod user_payload;

pub use list_users::{ListUsersQuery, PageRequest};
pub use user_payload::{validate_user_payload, CreateUserRequest, PayloadMode, UpdateUserRequest};
