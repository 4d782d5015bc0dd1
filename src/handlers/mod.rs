//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 추출, 응답 envelope        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 본문 검증, DTO 변환                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore (MongoDB)           ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - User, NewUser, UserPatch          ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<UserService>`로 주입받습니다. 핸들러는 `Result<HttpResponse, AppError>`를
//! 반환하고 `?`로 에러를 전파하며, 에러 응답 본문은 `AppError`가 만듭니다.

pub mod users;
