//! 원격 사용자 API 설정 모듈
//!
//! HTTP 클라이언트가 호출할 API의 base URL과 타임아웃을 관리합니다.
//!
//! ```bash
//! export API_BASE_URL="https://jsonplaceholder.typicode.com"
//! export API_TIMEOUT_SECS="10"
//! ```

use std::env;
use std::time::Duration;
use crate::errors::errors::{AppError, AppResult};

/// 원격 API 호출 설정
pub struct ApiConfig;

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://jsonplaceholder.typicode.com";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// API base URL을 반환합니다. (끝의 `/`는 제거)
    ///
    /// # Errors
    ///
    /// `API_BASE_URL`이 `http://` 또는 `https://`로 시작하지 않으면
    /// [`AppError::ConfigError`]를 반환합니다.
    pub fn base_url() -> AppResult<String> {
        let raw = env::var("API_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Self::normalize_base_url(&raw)
    }

    pub fn normalize_base_url(raw: &str) -> AppResult<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::ConfigError(format!(
                "API_BASE_URL must be an http(s) URL, got '{}'",
                raw
            )));
        }
        Ok(trimmed.to_string())
    }

    /// 요청 타임아웃
    ///
    /// - `API_TIMEOUT_SECS`: 기본값 10초, 0 또는 파싱 실패 시 기본값 사용
    pub fn timeout() -> Duration {
        let secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
