//! 라우트 설정 모듈
//!
//! 페이지, JSON API, 헬스체크 엔드포인트를 한곳에서 등록합니다.
//!
//! # Routes
//!
//! | 경로 | 핸들러 |
//! |------|--------|
//! | `GET /health` | [`health_check`] |
//! | `GET /` | [`handlers::pages::get_users_page`] |
//! | `GET /users/{user_id}` | [`handlers::pages::get_user_page`] |
//! | `GET /api/v1/users` | [`handlers::users::list_users`] |
//! | `GET /api/v1/users/{user_id}` | [`handlers::users::get_user`] |
//! | `GET /api/v1/registrations` | [`handlers::registrations::list_registrations`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(provider.data())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_api_routes(cfg);
}

/// 서버 렌더링 페이지 라우트
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::get_users_page)
        .service(handlers::pages::get_user_page);
}

/// JSON API 라우트를 설정합니다
///
/// ```bash
/// curl http://localhost:8080/api/v1/users
/// curl http://localhost:8080/api/v1/users/1
/// curl http://localhost:8080/api/v1/registrations
/// ```
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::registrations::list_registrations)
            .service(
                web::scope("/users")
                    .service(handlers::users::list_users)
                    .service(handlers::users::get_user),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 컨테이너나 원격 API에 접근하지 않으므로 Provider 없이도 응답합니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_directory",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_directory",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;
    use crate::core::provider::DependencyProvider;
    use crate::core::registry::Container;
    use crate::views::PageRenderer;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_directory");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_routes_are_mounted() {
        let provider = DependencyProvider::new(Container::new());
        let app = test::init_service(
            App::new()
                .app_data(provider.data())
                .app_data(web::Data::new(PageRenderer::new().unwrap()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/registrations").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!([]));

        // 빈 컨테이너: 라우트는 존재하지만 userUseCase 해석 실패
        let req = test::TestRequest::get().uri("/api/v1/users/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::get().uri("/users/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
