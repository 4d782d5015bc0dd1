//! # Domain Entities
//!
//! MongoDB에 저장되는 도메인 엔티티들입니다.
//!
//! - **영속성**: 문서 형태 그대로 `serde`로 직렬화
//! - **식별성**: 저장소가 할당하는 `ObjectId`
//! - **정규화**: 엔티티 입력 모델이 순수 함수로 제공하며 저장소가 호출

pub mod users;
