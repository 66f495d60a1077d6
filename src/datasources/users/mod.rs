//! 사용자 데이터 소스 모듈
//!
//! [`UserDataSource`](user_datasource::UserDataSource) 인터페이스와 HTTP 구현을 제공합니다.

pub mod user_datasource;

pub use user_datasource::{HttpUserDataSource, UserDataSource};
