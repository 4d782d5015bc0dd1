//! # 사용자 저장소 계약
//!
//! 서비스 계층이 의존하는 저장소 인터페이스입니다. 구현체는 MongoDB
//! ([`MongoUserRepository`](super::user_repo::MongoUserRepository))와
//! 테스트용 인메모리 저장소가 있습니다.
//!
//! 모든 구현체는 다음을 지켜야 합니다.
//!
//! - 생성과 수정 모두 저장 전에 정규화와 레코드 제약 검증을 수행
//! - 이메일 유일성은 저장소의 원자적 메커니즘으로 보장
//! - 실패는 [`StoreError`]의 닫힌 변형 집합으로만 보고

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::domain::dto::users::request::PageRequest;
use crate::domain::entities::users::user::{NewUser, User, UserPatch};

/// 저장소 실패 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 24자리 16진수 ObjectId가 아님
    #[error("invalid object id")]
    InvalidId,

    /// 해당 ID의 레코드 없음
    #[error("record not found")]
    NotFound,

    /// 유니크 인덱스 위반 (충돌한 필드 목록, 알 수 없으면 빈 목록)
    #[error("duplicate key: {0:?}")]
    DuplicateKey(Vec<String>),

    /// 레코드 제약(길이, 이메일 형식) 위반
    #[error("constraint violation: {0:?}")]
    Constraint(Vec<String>),

    /// 드라이버/연결 오류
    #[error("backend failure: {0}")]
    Backend(String),
}

/// 사용자 저장소 trait
///
/// `Arc<dyn UserStore>` 형태로 서비스에 주입됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 ID와 타임스탬프가 채워진 레코드를 반환합니다.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// `createdAt` 내림차순으로 한 페이지를 조회하고 전체 개수를 함께 반환합니다.
    async fn list(&self, page: PageRequest) -> Result<(Vec<User>, u64), StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError>;

    /// 값이 있는 필드만 적용하고 갱신된 전체 레코드를 반환합니다.
    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// 문자열 ID를 ObjectId로 변환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId)
}

/// 생성 입력 정규화 + 제약 검증
pub fn prepare_new_user(new_user: NewUser) -> Result<NewUser, StoreError> {
    let normalized = new_user.normalized();
    normalized.check_constraints().map_err(StoreError::Constraint)?;
    Ok(normalized)
}

/// 수정 입력 정규화 + 제약 검증
pub fn prepare_patch(patch: UserPatch) -> Result<UserPatch, StoreError> {
    let normalized = patch.normalized();
    normalized.check_constraints().map_err(StoreError::Constraint)?;
    Ok(normalized)
}
