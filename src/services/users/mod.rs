//! 사용자 관리 서비스 모듈
//!
//! 요청 본문 검증, 저장소 호출, 응답 DTO 변환을 담당하는
//! [`UserService`](user_service::UserService)를 제공합니다.

pub mod user_service;

pub use user_service::UserService;
