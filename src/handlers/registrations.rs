//! 컨테이너 등록 정보 조회 엔드포인트

use actix_web::{HttpResponse, get};
use crate::core::provider::Resolver;
use crate::errors::errors::AppError;

/// 가장 가까운 컨테이너의 등록 목록을 키 순서로 반환합니다.
#[get("/registrations")]
pub async fn list_registrations(resolver: Resolver) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(resolver.container().registrations()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use crate::core::provider::DependencyProvider;
    use crate::core::registry::{Container, Registration};

    #[actix_web::test]
    async fn test_list_registrations() {
        let mut container = Container::new();
        container.register([
            ("greeting", Registration::value(Arc::new("hello".to_string()))),
            (
                "shout",
                Registration::class::<String, _>(|deps| {
                    let greeting = deps.get::<String>("greeting")?;
                    Ok(Arc::new(greeting.to_uppercase()))
                })
                .inject(["greeting"]),
            ),
        ]);
        let provider = DependencyProvider::new(container);

        let app = test::init_service(App::new().app_data(provider.data()).service(list_registrations)).await;
        let req = test::TestRequest::get().uri("/registrations").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["key"], "greeting");
        assert_eq!(body[0]["lifetime"], "singleton");
        assert_eq!(body[1]["key"], "shout");
        assert_eq!(body[1]["lifetime"], "transient");
        assert_eq!(body[1]["dependencies"], json!(["greeting"]));
    }
}
