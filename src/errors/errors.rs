//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 의존성 해석, 외부 API 호출, 페이지 렌더링에서 발생하는 모든 에러를
//! 하나의 열거형으로 모읍니다. `thiserror`와 `actix_web::ResponseError`를 사용하여
//! 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! let use_case = container.resolve::<dyn UserUseCase>("userUseCase")?;
//! let user = use_case.find_one("1").await?; // 하위 계층 에러가 그대로 전파됨
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 해석(resolution) 에러는 `resolve` 호출 시점에 동기적으로 발생하고,
/// 네트워크/데이터 에러는 HTTP 클라이언트에서 발생하여 데이터 소스 →
/// 리포지토리 → 유스케이스를 거쳐 변형 없이 호출자에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 등록되지 않은 키 해석 (500 Internal Server Error)
    ///
    /// `requested_by`는 실패한 키까지 이어진 해석 경로입니다.
    /// 최상위 호출이면 비어 있습니다.
    #[error("Dependency not found: '{key}'{}", format_chain(.requested_by))]
    DependencyNotFound {
        key: String,
        requested_by: Vec<String>,
    },

    /// 해석 경로에 같은 키가 다시 등장함 (500 Internal Server Error)
    #[error("Circular dependency detected: {}", .chain.join(" -> "))]
    CircularDependency { chain: Vec<String> },

    /// 등록된 타입과 요청 타입이 다름 (500 Internal Server Error)
    #[error("Type mismatch for '{key}': registered {registered}, requested {requested}")]
    DependencyTypeMismatch {
        key: String,
        registered: &'static str,
        requested: &'static str,
    },

    /// 컨테이너 Provider 밖에서 의존성 해석 시도 (500 Internal Server Error)
    #[error("DependencyProvider not found")]
    ProviderNotFound,

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 값 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 템플릿 렌더링 에러 (500 Internal Server Error)
    #[error("Template error: {0}")]
    TemplateError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn format_chain(chain: &[String]) -> String {
    if chain.is_empty() {
        String::new()
    } else {
        format!(" (required by {})", chain.join(" -> "))
    }
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    ///
    /// JSON 응답과 페이지의 에러 상태가 같은 매핑을 사용합니다.
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        // tera는 실제 원인을 source 체인에 담음
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        AppError::TemplateError(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
