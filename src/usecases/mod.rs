//! 유스케이스 계층 모듈
//!
//! 리포지토리 위에서 애플리케이션 고유의 흐름을 표현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::usecases::users::UserUseCase;
//!
//! let use_case = use_dependency::<dyn UserUseCase>(&req, "userUseCase")?;
//! let user = use_case.find_one("1").await?;
//! ```

pub mod users;
