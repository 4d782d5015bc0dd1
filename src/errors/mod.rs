//! 에러 타입 모듈
//!
//! [`AppError`](errors::AppError)와 `AppResult<T>`를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorBody};
