//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정규화 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_string_list;
//!
//! let skills = normalize_string_list(vec![" rust ".to_string(), "".to_string()]);
//! ```

pub mod string_utils;
