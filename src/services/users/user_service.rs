//! # 사용자 서비스
//!
//! 핸들러와 저장소 사이의 비즈니스 로직 계층입니다.
//!
//! ## 처리 순서
//!
//! 1. 원시 JSON 본문 형태 검증 (저장소 접근 전)
//! 2. 요청 DTO로 역직렬화 (허용되지 않은 필드는 버려짐)
//! 3. 저장소 호출 (정규화, 레코드 제약, 유일성)
//! 4. `StoreError` → `AppError` 변환, 엔티티 → 응답 DTO 변환

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::dto::users::request::{
    validate_user_payload, CreateUserRequest, PageRequest, PayloadMode, UpdateUserRequest,
};
use crate::domain::dto::users::response::{UserPage, UserResponse};
use crate::domain::entities::users::user::UserPatch;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

/// 사용자 서비스
///
/// 저장소는 `Arc<dyn UserStore>`로 주입되므로 MongoDB 구현과
/// 테스트용 인메모리 구현을 그대로 바꿔 끼울 수 있습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
/// let service = UserService::new(store);
///
/// let user = service.create_user(json!({ "name": "Test", "email": "t@example.com" })).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 사용자를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `payload` - 원시 JSON 요청 본문
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 저장된 사용자
    /// * `Err(AppError::ValidationError)` - 본문 형태 또는 레코드 제약 위반
    /// * `Err(AppError::DuplicateKey)` - 이메일 중복
    pub async fn create_user(&self, payload: Value) -> AppResult<UserResponse> {
        validate_user_payload(&payload, PayloadMode::Create).map_err(AppError::ValidationError)?;
        let request: CreateUserRequest = parse_payload(payload)?;

        let user = self.store.create(request.into()).await?;
        log::info!("✅ 사용자 생성: {}", user.id_string().unwrap_or_default());

        Ok(UserResponse::from(user))
    }

    /// `createdAt` 내림차순으로 한 페이지를 조회합니다.
    pub async fn list_users(&self, page: PageRequest) -> AppResult<UserPage> {
        let (users, total) = self.store.list(page).await?;
        log::debug!(
            "사용자 목록 조회: page={}, limit={}, items={}, total={}",
            page.page,
            page.limit,
            users.len(),
            total
        );

        Ok(UserPage {
            page: page.page,
            limit: page.limit,
            total,
            items: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.store.find_by_id(id).await?;
        Ok(UserResponse::from(user))
    }

    /// 사용자를 부분 수정합니다.
    ///
    /// 본문 검증이 ID 검증보다 먼저 수행됩니다. 허용된 필드
    /// (name, email, skills, interests, learningGoals) 외의 값은 무시되며,
    /// 변경할 필드가 없으면 `updatedAt`만 갱신됩니다.
    pub async fn update_user(&self, id: &str, payload: Value) -> AppResult<UserResponse> {
        validate_user_payload(&payload, PayloadMode::Update).map_err(AppError::ValidationError)?;
        let request: UpdateUserRequest = parse_payload(payload)?;
        let patch = UserPatch::from(request);
        if patch.is_empty() {
            log::debug!("변경할 필드 없음, updatedAt만 갱신: {}", id);
        }

        let user = self.store.update(id, patch).await?;
        log::info!("✅ 사용자 수정: {}", id);

        Ok(UserResponse::from(user))
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.store.delete(id).await?;
        log::info!("🗑️ 사용자 삭제: {}", id);
        Ok(())
    }
}

/// 검증을 통과한 본문을 요청 DTO로 변환합니다.
///
/// 객체가 아닌 본문(`null`, 배열 등)은 빈 객체로 취급합니다.
/// 형태 검증을 통과한 본문이 역직렬화에 실패하면 검증기와 DTO가 어긋난
/// 것이므로 내부 에러로 처리합니다.
fn parse_payload<T: DeserializeOwned>(payload: Value) -> AppResult<T> {
    let payload = match payload {
        Value::Object(_) => payload,
        _ => Value::Object(Default::default()),
    };

    serde_json::from_value(payload)
        .map_err(|e| AppError::InternalError(format!("검증된 본문 역직렬화 실패: {}", e)))
}
