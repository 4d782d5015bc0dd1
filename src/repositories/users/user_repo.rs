//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 기반 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **원자적 유일성**: 이메일 중복은 `email_unique` 인덱스가 판정하며,
//!   드라이버 에러 코드 11000을 [`StoreError::DuplicateKey`]로 변환합니다.
//! - **원자적 수정**: `find_one_and_update` + `ReturnDocument::After`
//! - **동시 조회**: 목록 페이지와 전체 개수를 `try_join!`으로 함께 조회
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `{ email: 1 }` | unique |
//! | `created_at_desc` | `{ createdAt: -1 }` | |

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::Database;
use crate::domain::dto::users::request::PageRequest;
use crate::domain::entities::users::user::{NewUser, User, UserPatch};
use crate::repositories::users::user_store::{
    parse_object_id, prepare_new_user, prepare_patch, StoreError, UserStore,
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `dup key: { ... }` 본문
static DUP_KEY_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dup key: \{([^}]*)\}").expect("dup key pattern must compile"));

/// 본문 안의 `field:` (첫 항목 또는 `,` 뒤)
static DUP_KEY_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|,)\s*"?([^\s:",]+)"?\s*:"#).expect("dup key field pattern must compile")
});

/// MongoDB 사용자 리포지토리
///
/// `Collection` 핸들은 내부적으로 연결 풀을 공유하므로 복제 비용이 작습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::connect(&config.mongo_uri, &config.database_name).await?;
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let store: Arc<dyn UserStore> = Arc::new(repo);
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<User>(USERS_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 이미 같은 정의의 인덱스가 있으면 MongoDB가 그대로 유지하므로
    /// 매 시작 시 호출해도 안전합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 인덱스 생성 완료
    /// * `Err(StoreError::Backend)` - 생성 실패 (기존 데이터에 중복 이메일이 있는 경우 포함)
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스 (목록 정렬용)
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(backend_error)?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let new_user = prepare_new_user(new_user)?;
        let mut user = User::from_new(new_user, Utc::now());

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(translate_write_error)?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend("inserted_id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        log::debug!("사용자 저장 완료: {}", id.to_hex());
        Ok(user)
    }

    async fn list(&self, page: PageRequest) -> Result<(Vec<User>, u64), StoreError> {
        // 목록과 개수는 각각 독립 쿼리이므로 동시 변경 시 미세한 불일치를 허용
        let items = async {
            let cursor = self.collection
                .find(doc! {})
                .sort(doc! { "createdAt": -1, "_id": -1 })
                .skip(page.skip())
                .limit(page.limit as i64)
                .await?;
            cursor.try_collect::<Vec<User>>().await
        };
        let total = async { self.collection.count_documents(doc! {}).await };

        futures_util::try_join!(items, total).map_err(backend_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(backend_error)?
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        let object_id = parse_object_id(id)?;
        let patch = prepare_patch(patch)?;
        let set_doc = patch_document(&patch, Utc::now())?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set_doc })
            .with_options(options)
            .await
            .map_err(translate_write_error)?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(backend_error)?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// 수정 입력을 `$set` 문서로 변환합니다. `updatedAt`은 항상 포함됩니다.
fn patch_document(patch: &UserPatch, now: DateTime<Utc>) -> Result<Document, StoreError> {
    let mut set_doc = Document::new();

    if let Some(name) = &patch.name {
        set_doc.insert("name", name.as_str());
    }
    if let Some(email) = &patch.email {
        set_doc.insert("email", email.as_str());
    }
    for (field, value) in [
        ("skills", &patch.skills),
        ("interests", &patch.interests),
        ("learningGoals", &patch.learning_goals),
    ] {
        if let Some(items) = value {
            let items = bson::to_bson(items).map_err(|e| StoreError::Backend(e.to_string()))?;
            set_doc.insert(field, items);
        }
    }
    set_doc.insert("updatedAt", bson::DateTime::from_chrono(now));

    Ok(set_doc)
}

fn backend_error(error: MongoError) -> StoreError {
    StoreError::Backend(error.to_string())
}

/// 쓰기 에러 중 중복 키 위반을 분리합니다.
fn translate_write_error(error: MongoError) -> StoreError {
    match duplicate_key_message(&error) {
        Some(message) => StoreError::DuplicateKey(duplicate_fields_from_message(&message)),
        None => backend_error(error),
    }
}

/// 에러 코드가 11000인 경우 드라이버 메시지를 반환합니다.
///
/// `insert_one`은 `Write` 에러로, `find_one_and_update`는 `Command` 에러로 보고됩니다.
fn duplicate_key_message(error: &MongoError) -> Option<String> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.clone())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(command_error.message.clone())
        }
        _ => None,
    }
}

/// `... dup key: { email: "a@b.com" }` 형태의 메시지에서 필드명을 추출합니다.
fn duplicate_fields_from_message(message: &str) -> Vec<String> {
    let Some(body) = DUP_KEY_BODY.captures(message).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    DUP_KEY_FIELD
        .captures_iter(body.as_str())
        .filter_map(|caps| caps.get(1))
        .map(|field| field.as_str().to_string())
        .collect()
}
