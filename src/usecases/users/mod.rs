//! 사용자 유스케이스 모듈
//!
//! [`UserUseCase`](user_usecase::UserUseCase) 인터페이스와 리포지토리 위임 구현을 제공합니다.

pub mod user_usecase;

pub use user_usecase::{DefaultUserUseCase, UserUseCase};
