//! 외부 시스템 클라이언트 모듈
//!
//! - [`http_client`] - 원격 사용자 API용 JSON GET 클라이언트

pub mod http_client;

pub use http_client::HttpClient;
