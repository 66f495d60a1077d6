//! # Dependency Provider - 요청 처리 트리에 컨테이너 공급
//!
//! 하나의 [`Container`]를 actix-web `app_data`로 등록하여, 하위 라우트/핸들러가
//! 컨테이너를 인자로 전달받지 않고도 키로 의존성을 해석할 수 있게 합니다.
//!
//! - `App::app_data(provider.data())` → 애플리케이션 전체에 공급
//! - `web::scope(..).app_data(other.data())` → 해당 스코프에서 바깥 Provider를 가림
//!
//! Provider 밖에서 해석을 시도하면 [`AppError::ProviderNotFound`]가 즉시 반환됩니다.
//!
//! ```rust,ignore
//! #[get("/")]
//! async fn page(req: HttpRequest) -> Result<HttpResponse, AppError> {
//!     let use_case = use_dependency::<dyn UserUseCase>(&req, keys::USER_USE_CASE)?;
//!     let user = use_case.find_one("1").await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

use std::future::{Ready, ready};
use std::sync::Arc;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use crate::core::registry::Container;
use crate::errors::errors::{AppError, AppResult};

/// 컨테이너 하나를 요청 처리 트리에 공급하는 Provider
#[derive(Clone)]
pub struct DependencyProvider {
    container: web::Data<Container>,
}

impl DependencyProvider {
    pub fn new(container: Container) -> Self {
        Self {
            container: web::Data::new(container),
        }
    }

    /// `App::app_data` / `Scope::app_data`에 등록할 값
    pub fn data(&self) -> web::Data<Container> {
        self.container.clone()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

/// 가장 가까운 Provider의 컨테이너를 반환합니다.
///
/// # Errors
///
/// * [`AppError::ProviderNotFound`] - 요청이 어떤 Provider 아래에도 있지 않은 경우
pub fn nearest_container(req: &HttpRequest) -> AppResult<web::Data<Container>> {
    req.app_data::<web::Data<Container>>()
        .cloned()
        .ok_or(AppError::ProviderNotFound)
}

/// 가장 가까운 Provider의 컨테이너에서 키로 의존성을 해석합니다.
pub fn use_dependency<T>(req: &HttpRequest, key: &str) -> AppResult<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    nearest_container(req)?.resolve::<T>(key)
}

/// 핸들러 인자로 받는 해석기
///
/// 추출 시점에 Provider가 없으면 핸들러가 실행되기 전에 실패합니다.
pub struct Resolver(web::Data<Container>);

impl Resolver {
    pub fn resolve<T>(&self, key: &str) -> AppResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.0.resolve::<T>(key)
    }

    pub fn container(&self) -> &Container {
        &self.0
    }
}

impl FromRequest for Resolver {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(nearest_container(req).map(Resolver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test};
    use crate::core::registry::Registration;

    struct Label(&'static str);

    fn container_with_label(label: &'static str) -> Container {
        let mut container = Container::new();
        container.register([(
            "label",
            Registration::class::<Label, _>(move |_| Ok(Arc::new(Label(label)))),
        )]);
        container
    }

    async fn label_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
        let label = use_dependency::<Label>(&req, "label")?;
        Ok(HttpResponse::Ok().body(label.0))
    }

    async fn resolver_handler(resolver: Resolver) -> Result<HttpResponse, AppError> {
        let label = resolver.resolve::<Label>("label")?;
        Ok(HttpResponse::Ok().body(label.0))
    }

    #[actix_web::test]
    async fn test_hook_resolves_from_provider() {
        let provider = DependencyProvider::new(container_with_label("outer"));
        let app = test::init_service(
            App::new()
                .app_data(provider.data())
                .route("/", web::get().to(label_handler))
                .route("/resolver", web::get().to(resolver_handler)),
        )
        .await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body, "outer");

        let body = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/resolver").to_request(),
        )
        .await;
        assert_eq!(body, "outer");
    }

    #[actix_web::test]
    async fn test_hook_outside_provider_fails() {
        let app = test::init_service(
            App::new()
                .route("/", web::get().to(label_handler))
                .route("/resolver", web::get().to(resolver_handler)),
        )
        .await;

        for uri in ["/", "/resolver"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(res.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);

            let body = test::read_body(res).await;
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["error"], "DependencyProvider not found");
        }
    }

    #[actix_web::test]
    async fn test_nested_provider_shadows_outer() {
        let outer = DependencyProvider::new(container_with_label("outer"));
        let inner = DependencyProvider::new(container_with_label("inner"));
        let app = test::init_service(
            App::new()
                .app_data(outer.data())
                .route("/", web::get().to(label_handler))
                .service(
                    web::scope("/nested")
                        .app_data(inner.data())
                        .route("", web::get().to(label_handler)),
                ),
        )
        .await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body, "outer");

        let body = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/nested").to_request(),
        )
        .await;
        assert_eq!(body, "inner");
    }

    #[actix_web::test]
    async fn test_nearest_container_without_provider() {
        let req = test::TestRequest::default().to_http_request();
        assert!(matches!(nearest_container(&req), Err(AppError::ProviderNotFound)));
    }
}
