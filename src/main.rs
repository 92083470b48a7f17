//! 건강검진 기록 수집 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 외부 조회 API 클라이언트와 S3 클라이언트를 한 번 만들어 모든 워커가 공유합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use health_record_collector::config::{
    CorsConfig, Environment, FormSessionConfig, RateLimitConfig, ServerConfig, StorageConfig,
    VerificationApiConfig,
};
use health_record_collector::core::registry::ServiceRegistry;
use health_record_collector::routes::configure_all_routes;
use health_record_collector::services::archive::{ObjectStoreArchiver, S3ObjectStore};
use health_record_collector::services::forms::FormSessionStore;
use health_record_collector::services::verification::HttpVerificationGateway;
use health_record_collector::utils::display_terminal::{
    print_boxed_title, print_ready_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("HEALTH RECORD COLLECTOR");
    info!("🚀 건강검진 기록 수집 서비스 시작중...");

    let registry = build_registry().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(registry).await
}

/// 장수명 클라이언트를 만들고 서비스 컨테이너를 구성합니다
///
/// # Errors
///
/// * `std::io::Error` - HTTP 클라이언트 생성 실패
async fn build_registry() -> std::io::Result<ServiceRegistry> {
    let environment = Environment::current();

    print_step_start(1, "Building verification gateway");
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(std::io::Error::other)?;
    let gateway = HttpVerificationGateway::from_config(http_client);

    if VerificationApiConfig::api_key().is_empty() && !environment.is_local() {
        error!("CANDIY_API_KEY가 설정되지 않았습니다. 외부 조회 API 호출이 거부될 수 있습니다.");
    }
    print_sub_task("base_url", &VerificationApiConfig::base_url());
    print_sub_task("product", &VerificationApiConfig::product());
    print_step_complete(1, "Verification gateway ready");

    print_step_start(2, "Connecting object storage");
    let storage = StorageConfig::from_env();
    if !storage.has_credentials() {
        warn!("S3_ACCESS_KEY_ID / S3_SECRET_ACCESS_KEY 미설정, 기본 자격 증명 체인 사용");
    }
    let store = S3ObjectStore::connect(&storage).await;
    let archiver = ObjectStoreArchiver::new(Arc::new(store), storage.key_prefix.clone());
    print_sub_task("region", &storage.region);
    print_sub_task("bucket", &storage.bucket_name);
    print_sub_task("key_prefix", &storage.key_prefix);
    print_step_complete(2, "Object storage ready");

    print_step_start(3, "Preparing form session store");
    let ttl_minutes = FormSessionConfig::ttl_minutes();
    let sessions = FormSessionStore::new(ttl_minutes);
    print_sub_task("ttl_minutes", &ttl_minutes.to_string());
    print_step_complete(3, "Form session store ready");

    print_ready_summary(
        &ServerConfig::bind_address(),
        &VerificationApiConfig::product(),
        &storage.bucket_name,
    );

    Ok(ServiceRegistry::new(
        Arc::new(gateway),
        Arc::new(archiver),
        Arc::new(sessions),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Form API: http://{}/api/v1/forms", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let registry = web::Data::new(registry);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(registry.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
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
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=health_record_collector::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
