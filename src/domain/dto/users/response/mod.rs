//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "success": true,
//!   "data": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "name": "Test User",
//!     "email": "t@example.com",
//!     "skills": ["js"],
//!     "interests": [],
//!     "learningGoals": [],
//!     "createdAt": "2024-06-01T10:00:00Z",
//!     "updatedAt": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```

pub mod envelope;
pub mod user_response;

pub use envelope::{ApiResponse, MessageResponse, PaginatedResponse};
pub use user_response::{UserPage, UserResponse};
