//! # User JSON API Handlers
//!
//! 페이지와 같은 `userUseCase`를 JSON으로 노출합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users` | 사용자 목록 | 200 OK |
//! | `GET` | `/api/v1/users/{user_id}` | 사용자 조회 | 200 OK / 404 / 502 |
//!
//! 유스케이스는 [`Resolver`] 추출기로 요청마다 해석합니다. Provider가 없거나
//! 키가 등록되지 않았다면 핸들러 본문이 실행되기 전에 500 응답이 반환됩니다.
//!
//! ```bash
//! curl http://localhost:8080/api/v1/users/1
//! ```

use actix_web::{HttpResponse, get, web};
use log::debug;
use crate::core::container::keys;
use crate::core::provider::Resolver;
use crate::errors::errors::AppError;
use crate::usecases::users::user_usecase::UserUseCase;

#[get("")]
pub async fn list_users(resolver: Resolver) -> Result<HttpResponse, AppError> {
    let use_case = resolver.resolve::<dyn UserUseCase>(keys::USER_USE_CASE)?;
    let users = use_case.find_all().await?;

    debug!("📋 사용자 {}명 조회", users.len());

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    resolver: Resolver,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let use_case = resolver.resolve::<dyn UserUseCase>(keys::USER_USE_CASE)?;
    let user = use_case.find_one(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{App, http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use crate::clients::http_client::HttpClient;
    use crate::core::container::build_container;
    use crate::core::provider::DependencyProvider;
    use crate::core::registry::Registration;
    use crate::datasources::users::user_datasource::UserDataSource;
    use crate::domain::entities::users::user::User;
    use crate::errors::errors::AppResult;

    struct StubDataSource;

    #[async_trait]
    impl UserDataSource for StubDataSource {
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Ok(vec![
                User::new("1").with_field("name", "Leanne Graham"),
                User::new("2").with_field("name", "Ervin Howell"),
            ])
        }

        async fn find_one(&self, id: &str) -> AppResult<User> {
            if id == "1" {
                Ok(User::new("1").with_field("name", "Leanne Graham"))
            } else {
                Err(AppError::NotFound(format!("GET /users/{} → 404", id)))
            }
        }
    }

    fn stub_provider() -> DependencyProvider {
        let client = HttpClient::new("http://localhost:3000", std::time::Duration::from_secs(1)).unwrap();
        let mut container = build_container(client);
        container.register([(
            keys::USER_DATA_SOURCE,
            Registration::class::<dyn UserDataSource, _>(|_| {
                let stub: Arc<dyn UserDataSource> = Arc::new(StubDataSource);
                Ok(stub)
            }),
        )]);
        DependencyProvider::new(container)
    }

    #[actix_web::test]
    async fn test_list_users() {
        let app = test::init_service(
            App::new()
                .app_data(stub_provider().data())
                .service(web::scope("/api/v1/users").service(list_users).service(get_user)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!([
                { "id": "1", "name": "Leanne Graham" },
                { "id": "2", "name": "Ervin Howell" }
            ])
        );
    }

    #[actix_web::test]
    async fn test_get_user_and_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(stub_provider().data())
                .service(web::scope("/api/v1/users").service(list_users).service(get_user)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Leanne Graham");

        let req = test::TestRequest::get().uri("/api/v1/users/77").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_without_provider_returns_500() {
        let app = test::init_service(
            App::new().service(web::scope("/api/v1/users").service(list_users)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
