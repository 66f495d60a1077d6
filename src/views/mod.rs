//! # Server-side Page Rendering
//!
//! 페이지 템플릿을 바이너리에 포함하고 `tera`로 렌더링합니다.
//! 템플릿 이름이 `.html`로 끝나므로 모든 값은 자동으로 HTML 이스케이프됩니다.

use std::sync::Arc;
use serde::Serialize;
use tera::{Context, Tera};
use crate::core::registry::RegistrationInfo;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult, ErrorContext};

const TPL_GET_USERS: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
</head>
<body>
  <h1>{{ title }}</h1>
  <div class="users-list">
    <div class="card">
      <h2>User Info</h2>
      {% if error %}
      <div class="error" role="alert">
        <strong>{{ error.status }}</strong>
        <p>{{ error.message }}</p>
      </div>
      {% else %}
      <pre>{{ user }}</pre>
      {% endif %}
    </div>
    <div>
      <h2>Container Registrations</h2>
      <pre>{{ registrations }}</pre>
    </div>
  </div>
</body>
</html>
"#;

/// 페이지의 에러 상태
#[derive(Debug, Clone, Serialize)]
pub struct PageError {
    pub status: u16,
    pub message: String,
}

impl From<&AppError> for PageError {
    fn from(error: &AppError) -> Self {
        Self {
            status: error.status_code().as_u16(),
            message: error.to_string(),
        }
    }
}

/// GetUsers 페이지 뷰 모델
#[derive(Debug, Clone, Serialize)]
pub struct GetUsersView {
    pub title: String,
    /// 조회된 사용자 (pretty JSON)
    pub user: Option<String>,
    pub error: Option<PageError>,
    /// 컨테이너 등록 정보 (pretty JSON)
    pub registrations: String,
}

impl GetUsersView {
    pub fn new(result: &AppResult<User>, registrations: &[RegistrationInfo]) -> AppResult<Self> {
        let (user, error) = match result {
            Ok(user) => (Some(to_pretty_json(user)?), None),
            Err(e) => (None, Some(PageError::from(e))),
        };

        Ok(Self {
            title: "Example".to_string(),
            user,
            error,
            registrations: to_pretty_json(&registrations)?,
        })
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).context("JSON 직렬화 실패")
}

/// 내장 템플릿 렌더러
#[derive(Clone)]
pub struct PageRenderer {
    templates: Arc<Tera>,
}

impl PageRenderer {
    pub const GET_USERS: &'static str = "get_users.html";

    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(Self::GET_USERS, TPL_GET_USERS)?;

        Ok(Self {
            templates: Arc::new(tera),
        })
    }

    pub fn render_get_users(&self, view: &GetUsersView) -> AppResult<String> {
        let context = Context::from_serialize(view)?;
        Ok(self.templates.render(Self::GET_USERS, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Lifetime;

    fn registrations() -> Vec<RegistrationInfo> {
        vec![RegistrationInfo {
            key: "userUseCase".to_string(),
            lifetime: Lifetime::Transient,
            dependencies: vec!["userRepository".to_string()],
            implementation: "dyn UserUseCase".to_string(),
        }]
    }

    #[test]
    fn test_render_success_state() {
        let renderer = PageRenderer::new().unwrap();
        let result = Ok(User::new("1").with_field("name", "<X>"));

        let view = GetUsersView::new(&result, &registrations()).unwrap();
        let html = renderer.render_get_users(&view).unwrap();

        assert!(html.contains("<h2>User Info</h2>"));
        assert!(html.contains("&lt;X&gt;"));
        assert!(!html.contains("<X>"));
        assert!(html.contains("userRepository"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_render_error_state() {
        let renderer = PageRenderer::new().unwrap();
        let result: AppResult<User> = Err(AppError::NotFound("GET /users/9 → 404".to_string()));

        let view = GetUsersView::new(&result, &registrations()).unwrap();
        let html = renderer.render_get_users(&view).unwrap();

        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("404"));
        assert!(html.contains("Not found: GET"));
        assert!(view.user.is_none());
    }
}
