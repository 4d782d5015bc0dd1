//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User) - `users` 컬렉션에 저장되는 사용자 프로필 문서
//! - [`NewUser`](user::NewUser) - 생성 입력 (정규화 + 제약 검증)
//! - [`UserPatch`](user::UserPatch) - 부분 수정 입력 (정규화 + 제약 검증)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{NewUser, User};
//!
//! let new_user = NewUser {
//!     name: "  Test User ".to_string(),
//!     email: "T@Example.com".to_string(),
//!     ..NewUser::default()
//! }
//! .normalized();
//!
//! new_user.check_constraints()?;
//! let user = User::from_new(new_user, chrono::Utc::now());
//! ```

pub mod user;
