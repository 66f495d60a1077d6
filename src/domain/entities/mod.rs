//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! └── entities/
//!     └── users/   ← 원격 API의 사용자 레코드
//! ```
//!
//! 엔티티는 조회 이후 변경되지 않으며, 이를 보관하는 응답/페이지 상태와 함께 해제됩니다.

pub mod users;
