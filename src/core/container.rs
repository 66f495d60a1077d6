//! # Container Wiring - 프로세스 시작 시 등록 구성
//!
//! 사용자 모듈의 계층을 키로 묶어 컨테이너에 등록합니다.
//!
//! | 키 | 구현 | 생명주기 | 주입 |
//! |----|------|----------|------|
//! | `httpClient` | [`HttpClient`] | singleton | - |
//! | `userDataSource` | [`HttpUserDataSource`] | transient | `httpClient` |
//! | `userRepository` | [`DefaultUserRepository`] | transient | `userDataSource` |
//! | `userUseCase` | [`DefaultUserUseCase`] | transient | `userRepository` |
//!
//! 구현을 교체하려면 같은 키로 다른 레시피를 등록하면 됩니다.
//! (예: 테스트에서 `userDataSource`를 스텁으로 교체)

use std::sync::Arc;
use log::info;
use crate::clients::http_client::HttpClient;
use crate::core::registry::{Container, Registration};
use crate::datasources::users::user_datasource::{HttpUserDataSource, UserDataSource};
use crate::errors::errors::AppResult;
use crate::repositories::users::user_repo::{DefaultUserRepository, UserRepository};
use crate::usecases::users::user_usecase::{DefaultUserUseCase, UserUseCase};
use crate::utils::display_terminal::{
    format_registration, print_boxed_title, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 등록 키 상수
pub mod keys {
    pub const HTTP_CLIENT: &str = "httpClient";
    pub const USER_DATA_SOURCE: &str = "userDataSource";
    pub const USER_REPOSITORY: &str = "userRepository";
    pub const USER_USE_CASE: &str = "userUseCase";
}

/// 사용자 계층(데이터 소스 → 리포지토리 → 유스케이스)을 등록합니다.
///
/// `httpClient`는 등록하지 않으므로 호출자가 별도로 제공해야 합니다.
pub fn register_user_module(container: &mut Container) {
    container.register([
        (
            keys::USER_DATA_SOURCE,
            Registration::class::<dyn UserDataSource, _>(|deps| {
                let http_client = deps.get::<HttpClient>(keys::HTTP_CLIENT)?;
                let data_source: Arc<dyn UserDataSource> = Arc::new(HttpUserDataSource::new(http_client));
                Ok(data_source)
            })
            .inject([keys::HTTP_CLIENT]),
        ),
        (
            keys::USER_REPOSITORY,
            Registration::class::<dyn UserRepository, _>(|deps| {
                let data_source = deps.get::<dyn UserDataSource>(keys::USER_DATA_SOURCE)?;
                let repository: Arc<dyn UserRepository> = Arc::new(DefaultUserRepository::new(data_source));
                Ok(repository)
            })
            .inject([keys::USER_DATA_SOURCE]),
        ),
        (
            keys::USER_USE_CASE,
            Registration::class::<dyn UserUseCase, _>(|deps| {
                let repository = deps.get::<dyn UserRepository>(keys::USER_REPOSITORY)?;
                let use_case: Arc<dyn UserUseCase> = Arc::new(DefaultUserUseCase::new(repository));
                Ok(use_case)
            })
            .inject([keys::USER_REPOSITORY]),
        ),
    ]);
}

/// 주어진 HTTP 클라이언트로 전체 컨테이너를 구성합니다.
pub fn build_container(http_client: HttpClient) -> Container {
    let mut container = Container::new();
    container.register([(keys::HTTP_CLIENT, Registration::value(Arc::new(http_client)))]);
    register_user_module(&mut container);
    container
}

/// 환경 변수 설정으로 컨테이너를 구성하고 모든 바인딩을 검증합니다.
///
/// 등록된 모든 키를 한 번씩 해석하여 누락된 바인딩이나 순환을
/// 서버 시작 전에 발견합니다.
pub fn initialize_container() -> AppResult<Container> {
    print_boxed_title("🔄 BUILDING DEPENDENCY CONTAINER");

    let http_client = HttpClient::from_env()?;
    info!("🌐 API base URL: {}", http_client.base_url());

    let container = build_container(http_client);
    let registrations = container.registrations();

    print_step_start(1, "Registering bindings");
    for registration in &registrations {
        print_sub_task(&registration.key, &format_registration(registration));
    }
    print_step_complete(1, "Bindings registered", registrations.len());

    print_step_start(2, "Verifying dependency graph");
    for registration in &registrations {
        container.probe(&registration.key)?;
        print_sub_task(&registration.key, "✓ Resolved");
    }
    print_step_complete(2, "Dependency graph verified", registrations.len());

    print_final_summary(&registrations);

    Ok(container)
}
