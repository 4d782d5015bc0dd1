//! 사용자 관리 서비스 백엔드
//!
//! 학습 플랫폼 사용자 프로필(이름, 이메일, 기술, 관심사, 학습 목표)을
//! MongoDB에 저장하고 JSON REST API로 생성/조회/수정/삭제를 제공합니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 생성, 페이지 목록, 단건 조회, 부분 수정, 삭제
//! - **입력 검증**: 원시 JSON 형태 검증 + 레코드 제약(`validator`)
//! - **정규화**: 이름/이메일 트림, 이메일 소문자화, 빈 목록 항목 제거
//! - **이메일 유일성**: MongoDB 유니크 인덱스
//! - **명시적 의존성 주입**: `Arc<dyn UserStore>` → `UserService` → `web::Data`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출/응답 envelope
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 본문 검증, DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (정규화, 제약, 유일성)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_management_service::db::Database;
//! use user_management_service::repositories::users::{MongoUserRepository, UserStore};
//! use user_management_service::services::users::UserService;
//!
//! let database = Database::connect("mongodb://localhost:27017", "user_management").await?;
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
//! let service = UserService::new(store);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
