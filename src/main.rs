//! Disqus 인증 데모 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 Disqus 클라이언트와 세션 저장소를 초기화합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use disqus_auth_service::caching::{MemorySessionStore, RedisSessionStore, SessionStore};
use disqus_auth_service::config::{
    AppSettings, DisqusOAuthConfig, Environment, ServerConfig, SessionBackend, SessionConfig,
};
use disqus_auth_service::http::ReqwestTransport;
use disqus_auth_service::routes::configure_all_routes;
use disqus_auth_service::services::auth::{DisqusAuthService, DisqusEndpoints};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Disqus 인증 서비스 시작중...");

    let store = initialize_session_store().await?;

    let service = web::Data::new(DisqusAuthService::new(
        Arc::new(ReqwestTransport::new()),
        DisqusOAuthConfig::credentials(),
        DisqusEndpoints::from_env(),
    ));
    let store = web::Data::from(store);
    let settings = web::Data::new(AppSettings::from_env());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(service, store, settings).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    service: web::Data<DisqusAuthService>,
    store: web::Data<dyn SessionStore>,
    settings: web::Data<AppSettings>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: http://{}/login", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origin = format!("http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origin))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(service.clone())
            .app_data(store.clone())
            .app_data(settings.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(4) // 워커 스레드 수
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
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=disqus_auth_service::services=debug cargo run
/// ```
fn init_logging() {
    let filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(filter));
}

/// `SESSION_STORE` 설정에 따라 세션 저장소를 생성합니다
///
/// # Errors
///
/// * Redis 선택 시 연결 실패
async fn initialize_session_store() -> std::io::Result<Arc<dyn SessionStore>> {
    match SessionConfig::backend() {
        SessionBackend::Redis => {
            info!("📡 Redis 세션 저장소 연결 중...");
            let store = RedisSessionStore::connect(&SessionConfig::redis_url())
                .await
                .map_err(|e| {
                    error!("Redis 연결 실패: {}", e);
                    std::io::Error::other(e)
                })?;
            Ok(Arc::new(store))
        }
        SessionBackend::Memory => {
            info!("🗂️ 메모리 세션 저장소 사용");
            Ok(Arc::new(MemorySessionStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 데모 앱 자신의 origin 과 로컬 프론트엔드 개발 서버를 허용합니다.
fn configure_cors(self_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(self_origin)
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")

        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 세션 쿠키 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
