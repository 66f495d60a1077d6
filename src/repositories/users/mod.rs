//! 사용자 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 인터페이스와 데이터 소스 위임 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = container.resolve::<dyn UserRepository>("userRepository")?;
//! let user = user_repo.find_one("1").await?;
//! ```

pub mod user_repo;

pub use user_repo::{DefaultUserRepository, UserRepository};
