//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 [`UserStore`](users::user_store::UserStore) trait 뒤에 숨겨지며,
//! `main`에서 한 번 생성되어 `web::Data`로 주입됩니다. 전역 싱글톤은 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let repo = MongoUserRepository::new(&database);
//! repo.create_indexes().await?;
//! let store: Arc<dyn UserStore> = Arc::new(repo);
//! ```

pub mod users;
