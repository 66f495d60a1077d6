//! Users Entity Module
//!
//! 원격 사용자 API가 반환하는 [`User`](user::User) 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user: User = serde_json::from_str(r#"{"id":"1","name":"X"}"#)?;
//! assert_eq!(user.id, "1");
//! ```

pub mod user;

pub use user::User;
