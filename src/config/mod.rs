//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한 곳에서 읽어 [`AppConfig`]로 제공합니다.
//! 설정은 시작 시 한 번만 읽고, 이후에는 값으로 전달됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export MONGO_URI="mongodb://localhost:27017"   # MONGODB_URI도 허용
//!
//! # 선택
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export DATABASE_NAME="user_management"
//! export HTTP_WORKERS="4"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//! ```
//!
//! `.env` 파일 선택은 `PROFILE` 변수(`dev`, `prod`)로 결정되며 `main`에서 처리합니다.

pub mod data_config;

pub use data_config::*;
