//! # Core Framework Module
//!
//! 의존성 주입 컨테이너와, 컨테이너를 요청 처리 트리에 공급하는 브리지를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 키 기반 의존성 주입 컨테이너
//! - **Container**: 문자열 키 → 생성 레시피 매핑과 재귀 해석 알고리즘
//! - **Registration**: factory + 의존성 이름 목록 + 생명주기
//! - **Lifetime**: transient(기본) / singleton / scoped
//!
//! ### [`provider`] - 의존성 해석 브리지
//! - **DependencyProvider**: 컨테이너 하나를 actix-web `app_data`로 공급
//! - **use_dependency**: 가장 가까운 Provider에서 키로 해석
//! - **Resolver**: 핸들러 인자로 받는 추출기
//!
//! ### [`container`] - 등록 구성
//! - `httpClient`, `userDataSource`, `userRepository`, `userUseCase` 바인딩
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `Container` |
//! | `@Bean` 메서드 | `Registration::class` |
//! | `registerSingleton()` | `Registration::value` |
//! | `getBean("name")` | `Container::resolve::<T>("name")` |
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! let container = initialize_container()?;       // 1. 등록 + 검증
//! let provider = DependencyProvider::new(container);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(provider.data())               // 2. 트리에 공급
//!         .configure(configure_all_routes)        // 3. 핸들러에서 use_dependency
//! })
//! ```
//!
//! ## 트러블슈팅
//!
//! ```text
//! Dependency not found: 'httpClient' (required by userUseCase -> userRepository -> userDataSource)
//! ```
//! **해결**: 누락된 키를 등록하거나 `inject`에 선언한 이름의 오타를 확인

pub mod registry;
pub mod provider;
pub mod container;

pub use registry::*;
pub use provider::*;
pub use container::*;
