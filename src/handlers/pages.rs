//! # Page Handlers
//!
//! GetUsers 페이지를 서버에서 렌더링합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/` | 사용자 `"1"` 페이지 |
//! | `GET` | `/users/{user_id}` | 지정한 사용자 페이지 |
//!
//! 요청마다 가장 가까운 Provider에서 `userUseCase`를 해석하고 한 번 조회합니다.
//! 조회 실패는 페이지의 에러 상태로 렌더링되고, 상태 코드는 에러 종류를 따릅니다.
//! 해석 실패(Provider 없음, 미등록 키)는 페이지를 그리지 않고 그대로 전파됩니다.

use actix_web::{HttpRequest, HttpResponse, get, http::StatusCode, web};
use log::warn;
use crate::core::container::keys;
use crate::core::provider::{nearest_container, use_dependency};
use crate::errors::errors::{AppError, AppResult};
use crate::usecases::users::user_usecase::UserUseCase;
use crate::views::{GetUsersView, PageRenderer};

/// 루트 페이지에 표시할 사용자
pub const DEFAULT_USER_ID: &str = "1";

#[get("/")]
pub async fn get_users_page(
    req: HttpRequest,
    renderer: web::Data<PageRenderer>,
) -> Result<HttpResponse, AppError> {
    render_user_page(&req, &renderer, DEFAULT_USER_ID).await
}

#[get("/users/{user_id}")]
pub async fn get_user_page(
    req: HttpRequest,
    renderer: web::Data<PageRenderer>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    render_user_page(&req, &renderer, &user_id).await
}

async fn render_user_page(
    req: &HttpRequest,
    renderer: &PageRenderer,
    user_id: &str,
) -> AppResult<HttpResponse> {
    let user_use_case = use_dependency::<dyn UserUseCase>(req, keys::USER_USE_CASE)?;
    let registrations = nearest_container(req)?.registrations();

    let result = user_use_case.find_one(user_id).await;
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            warn!("⚠️ 사용자 {} 조회 실패: {}", user_id, e);
            e.status_code()
        }
    };

    let view = GetUsersView::new(&result, &registrations)?;
    let html = renderer.render_get_users(&view)?;

    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}
