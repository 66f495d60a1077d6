//! # HTTP Client
//!
//! 원격 API에 대한 GET 요청을 수행하고 응답 본문을 파싱하는 공용 클라이언트입니다.
//! 컨테이너에 `httpClient` 키의 싱글톤으로 등록되어 모든 데이터 소스가
//! 하나의 커넥션 풀을 공유합니다.
//!
//! ## 에러 매핑
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 404 응답 | [`AppError::NotFound`] |
//! | 그 외 non-2xx 응답 | [`AppError::ExternalServiceError`] |
//! | 연결 실패 / 타임아웃 | [`AppError::ExternalServiceError`] |
//! | 응답 본문 파싱 실패 | [`AppError::ExternalServiceError`] |
//!
//! 상위 계층(데이터 소스, 리포지토리, 유스케이스)은 이 에러를 변형하지 않습니다.

use std::time::Duration;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use crate::config::ApiConfig;
use crate::errors::errors::{AppError, AppResult};

/// base URL이 고정된 JSON GET 클라이언트
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// 주어진 base URL과 타임아웃으로 클라이언트를 생성합니다.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = ApiConfig::normalize_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(ApiConfig::user_agent())
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// 환경 변수 설정으로 클라이언트를 생성합니다.
    pub fn from_env() -> AppResult<Self> {
        Self::new(&ApiConfig::base_url()?, ApiConfig::timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}{path}`를 수행하고 JSON 본문을 `T`로 파싱합니다.
    ///
    /// `path`는 `/`로 시작해야 하며, 경로 세그먼트의 인코딩은 호출자가 담당합니다.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("🌐 GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                warn!("❌ GET {} 요청 실패: {}", url, e);
                AppError::ExternalServiceError(format!("GET {} 요청 실패: {}", path, e))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("GET {} → 404", path)));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("❌ GET {} → {}: {}", url, status, error_text);
            return Err(AppError::ExternalServiceError(format!(
                "GET {} → {}: {}",
                path, status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GET {} 응답 파싱 실패: {}", path, e)))
    }
}
