//! 사용자 디렉터리 서비스
//!
//! 원격 REST API에서 사용자 정보를 가져와 서버 렌더링 페이지와 JSON으로 제공합니다.
//! 모든 계층은 문자열 키 기반 의존성 주입 컨테이너로 연결됩니다.
//!
//! # Features
//!
//! - **키 기반 DI 컨테이너**: transient / singleton / scoped 생명주기, 순환 감지
//! - **Provider 브리지**: actix-web `app_data`를 통한 가장 가까운 컨테이너 해석
//! - **계층 분리**: 데이터 소스 → 리포지토리 → 유스케이스
//! - **GetUsers 페이지**: `tera` 템플릿 기반 서버 렌더링
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Routes/Handlers │ ← 페이지 + JSON API
//! └─────────────────┘
//!          │ use_dependency("userUseCase")
//!          ▼
//! ┌─────────────────┐
//! │    UseCase      │ ← userUseCase
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Repository    │ ← userRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   DataSource    │ ← userDataSource
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   HttpClient    │ ← httpClient (원격 API)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_directory::core::{initialize_container, keys};
//! use user_directory::usecases::users::user_usecase::UserUseCase;
//!
//! let container = initialize_container()?;
//! let use_case = container.resolve::<dyn UserUseCase>(keys::USER_USE_CASE)?;
//! let user = use_case.find_one("1").await?;
//! ```

pub mod core;
pub mod config;
pub mod clients;
pub mod domain;
pub mod datasources;
pub mod repositories;
pub mod usecases;
pub mod views;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
