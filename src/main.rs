//! 사용자 디렉터리 서비스 메인 애플리케이션
//!
//! 의존성 컨테이너를 구성하고 Provider로 감싼 뒤 Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_directory::config::{CorsConfig, Environment, ServerConfig};
use user_directory::core::container::initialize_container;
use user_directory::core::provider::DependencyProvider;
use user_directory::routes::configure_all_routes;
use user_directory::views::PageRenderer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    info!("🚀 사용자 디렉터리 서비스 시작중... ({:?})", environment);

    // 컨테이너 구성 및 바인딩 검증
    let container = match initialize_container() {
        Ok(container) => container,
        Err(e) => {
            error!("❌ 컨테이너 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };

    let renderer = match PageRenderer::new() {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("❌ 템플릿 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };

    info!("✅ {}개의 바인딩이 준비되었습니다!", container.len());

    // HTTP 서버 시작
    start_http_server(DependencyProvider::new(container), web::Data::new(renderer)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 모든 워커가 같은 Provider(같은 컨테이너)를 공유합니다.
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    provider: DependencyProvider,
    renderer: web::Data<PageRenderer>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 GetUsers page: http://{}/", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/users", bind_address);

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 의존성 Provider + 페이지 렌더러
            .app_data(provider.data())
            .app_data(renderer.clone())

            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값은 `ENVIRONMENT`에 따름)
///
/// ```bash
/// RUST_LOG=user_directory::core=debug cargo run
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다. 서비스는 조회 전용이므로
/// `GET`과 Preflight만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
