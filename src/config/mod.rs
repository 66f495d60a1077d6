//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며, `main`에서
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS 설정
//! - [`api_config`] - 원격 사용자 API(base URL, 타임아웃) 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export API_BASE_URL="https://jsonplaceholder.typicode.com"
//! export API_TIMEOUT_SECS="10"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:5173"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `PROFILE=dev` → `.env.dev` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod api_config;

pub use data_config::*;
pub use api_config::*;
