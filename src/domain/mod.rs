//! # Domain Layer Module
//!
//! 사용자 프로필 도메인의 엔티티와 DTO를 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 사용자 문서, 정규화/제약 검증
//! └── DTOs      - 요청 검증, 응답 envelope
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
