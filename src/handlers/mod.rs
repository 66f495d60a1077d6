//! # HTTP Request Handlers Module
//!
//! 컨테이너에서 유스케이스를 꺼내 HTTP 응답으로 변환하는 핸들러 모음입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 페이지 / JSON 엔드포인트     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   DependencyProvider - 가장 가까운 컨테이너         ← DI Bridge
//! ├─────────────────────────────────────────────┤
//!   UseCase → Repository → DataSource              ← User Module
//! ├─────────────────────────────────────────────┤
//!   HttpClient - 원격 사용자 API                     ← Infrastructure
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 구체 타입을 알지 못합니다. 키(`userUseCase`)와 trait만으로
//! 의존성을 요청하므로 컨테이너 등록만 바꾸면 구현이 교체됩니다.
//!
//! ## 의존성 해석 방식
//!
//! ```rust,ignore
//! // 1. 훅 스타일 - HttpRequest에서 직접 해석
//! let use_case = use_dependency::<dyn UserUseCase>(&req, keys::USER_USE_CASE)?;
//!
//! // 2. 추출기 스타일 - 핸들러 인자로 Resolver를 받음
//! pub async fn list_users(resolver: Resolver) -> Result<HttpResponse, AppError> {
//!     let use_case = resolver.resolve::<dyn UserUseCase>(keys::USER_USE_CASE)?;
//!     ...
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`pages`] - GetUsers HTML 페이지
//! - [`users`] - 사용자 JSON API
//! - [`registrations`] - 컨테이너 등록 정보

pub mod pages;
pub mod users;
pub mod registrations;
