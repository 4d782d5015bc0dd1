//! 테스트용 인메모리 사용자 저장소
//!
//! MongoDB 없이 서비스와 핸들러를 검증하기 위한 [`UserStore`] 구현입니다.
//! 이메일 중복 검사와 삽입을 하나의 잠금 안에서 수행하여 유니크 인덱스와
//! 같은 원자성을 가집니다.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::domain::dto::users::request::PageRequest;
use crate::domain::entities::users::user::{NewUser, User, UserPatch};
use crate::repositories::users::user_store::{
    parse_object_id, prepare_new_user, prepare_patch, StoreError, UserStore,
};

/// 삽입 순서대로 레코드를 보관하는 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, StoreError> {
        self.users
            .lock()
            .map_err(|_| StoreError::Backend("user store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let new_user = prepare_new_user(new_user)?;
        let mut user = User::from_new(new_user, Utc::now());

        let mut users = self.lock()?;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::DuplicateKey(vec!["email".to_string()]));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self, page: PageRequest) -> Result<(Vec<User>, u64), StoreError> {
        let users = self.lock()?;

        // 같은 시각이면 나중에 삽입된 레코드가 먼저
        let mut ordered: Vec<&User> = users.iter().rev().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let items = ordered
            .into_iter()
            .skip(skip)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok((items, users.len() as u64))
    }

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
        let object_id = parse_object_id(id)?;

        self.lock()?
            .iter()
            .find(|user| user.id == Some(object_id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        let object_id = parse_object_id(id)?;
        let patch = prepare_patch(patch)?;

        let mut users = self.lock()?;
        let position = users
            .iter()
            .position(|user| user.id == Some(object_id))
            .ok_or(StoreError::NotFound)?;

        if let Some(email) = &patch.email {
            let taken = users
                .iter()
                .any(|user| user.id != Some(object_id) && &user.email == email);
            if taken {
                return Err(StoreError::DuplicateKey(vec!["email".to_string()]));
            }
        }

        let user = &mut users[position];
        user.apply_patch(patch, Utc::now());

        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let object_id = parse_object_id(id)?;

        let mut users = self.lock()?;
        let position = users
            .iter()
            .position(|user| user.id == Some(object_id))
            .ok_or(StoreError::NotFound)?;
        users.remove(position);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            ..NewUser::default()
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = InMemoryUserRepository::new();
        let user = store.create(new_user(" Test ", "T@Example.com")).await.unwrap();

        assert!(user.id.is_some());
        assert_eq!(user.name, "Test");
        assert_eq!(user.email, "t@example.com");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[actix_web::test]
    async fn test_duplicate_email_after_normalization() {
        let store = InMemoryUserRepository::new();
        store.create(new_user("A", "a@example.com")).await.unwrap();

        let result = store.create(new_user("B", "  A@EXAMPLE.COM ")).await;
        assert_eq!(result, Err(StoreError::DuplicateKey(vec!["email".to_string()])));
    }

    #[actix_web::test]
    async fn test_concurrent_creates_with_same_email() {
        let store = Arc::new(InMemoryUserRepository::new());

        let attempts = (0..8).map(|i| {
            let store = Arc::clone(&store);
            async move { store.create(new_user(&format!("User {}", i), "same@example.com")).await }
        });
        let results = futures_util::future::join_all(attempts).await;

        let created = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::DuplicateKey(_))))
            .count();
        assert_eq!(created, 1);
        assert_eq!(duplicates, 7);
    }

    #[actix_web::test]
    async fn test_list_orders_newest_first_and_counts_all() {
        let store = InMemoryUserRepository::new();
        for i in 0..5 {
            store
                .create(new_user(&format!("User {}", i), &format!("u{}@example.com", i)))
                .await
                .unwrap();
        }

        let (items, total) = store.list(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "User 4");
        assert_eq!(items[1].name, "User 3");

        let (items, _) = store.list(PageRequest::new(3, 2)).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "User 0");

        let (items, total) = store.list(PageRequest::new(10, 2)).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 5);
    }

    #[actix_web::test]
    async fn test_update_rejects_email_of_another_user() {
        let store = InMemoryUserRepository::new();
        store.create(new_user("A", "a@example.com")).await.unwrap();
        let b = store.create(new_user("B", "b@example.com")).await.unwrap();
        let b_id = b.id_string().unwrap();

        let patch = UserPatch {
            email: Some("A@example.com".to_string()),
            ..UserPatch::default()
        };
        assert_eq!(
            store.update(&b_id, patch).await,
            Err(StoreError::DuplicateKey(vec!["email".to_string()]))
        );

        // 자기 자신의 이메일로 수정은 허용
        let patch = UserPatch {
            email: Some("b@example.com".to_string()),
            ..UserPatch::default()
        };
        assert!(store.update(&b_id, patch).await.is_ok());
    }

    #[actix_web::test]
    async fn test_update_unknown_id_wins_over_email_collision() {
        let store = InMemoryUserRepository::new();
        store.create(new_user("A", "a@example.com")).await.unwrap();

        let patch = UserPatch {
            email: Some("a@example.com".to_string()),
            ..UserPatch::default()
        };
        assert_eq!(
            store.update(&ObjectId::new().to_hex(), patch).await,
            Err(StoreError::NotFound)
        );
    }

    #[actix_web::test]
    async fn test_id_failures() {
        let store = InMemoryUserRepository::new();
        let unknown = ObjectId::new().to_hex();

        assert_eq!(store.find_by_id("not-an-id").await, Err(StoreError::InvalidId));
        assert_eq!(store.find_by_id(&unknown).await, Err(StoreError::NotFound));
        assert_eq!(store.delete("not-an-id").await, Err(StoreError::InvalidId));
        assert_eq!(store.delete(&unknown).await, Err(StoreError::NotFound));
        assert_eq!(
            store.update(&unknown, UserPatch::default()).await,
            Err(StoreError::NotFound)
        );
    }

    #[actix_web::test]
    async fn test_delete_is_permanent() {
        let store = InMemoryUserRepository::new();
        let user = store.create(new_user("A", "a@example.com")).await.unwrap();
        let id = user.id_string().unwrap();

        store.delete(&id).await.unwrap();
        assert_eq!(store.find_by_id(&id).await, Err(StoreError::NotFound));

        // 삭제된 이메일은 다시 사용할 수 있음
        assert!(store.create(new_user("A", "a@example.com")).await.is_ok());
    }
}
