//! 사용자 저장소 모듈
//!
//! - [`user_store`] - 저장소 계약(`UserStore`)과 실패 타입(`StoreError`)
//! - [`user_repo`] - MongoDB 구현
//! - `memory_store` - 테스트용 인메모리 구현

pub mod user_repo;
pub mod user_store;

#[cfg(test)]
pub mod memory_store;

pub use user_repo::MongoUserRepository;
pub use user_store::{StoreError, UserStore};
