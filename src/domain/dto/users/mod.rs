//! # 사용자 DTO 모듈
//!
//! - [`request`] - 요청 본문 검증, 생성/수정 요청, 목록 쿼리
//! - [`response`] - 사용자 응답과 공통 envelope

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
