//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소를 생성자 인자로 받아 보관하며, `main`에서 한 번 생성되어
//! `web::Data`로 핸들러에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(store));
//! App::new().app_data(service.clone());
//! ```

pub mod users;
