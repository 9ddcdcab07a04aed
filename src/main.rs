//! 링크 백엔드 서버
//!
//! 설정을 읽고 MongoDB/Redis에 연결한 뒤 서비스 레지스트리를 초기화하고
//! Actix-web HTTP 서버를 구동합니다.
//!
//! `STORAGE=memory`로 실행하면 외부 저장소 없이 인메모리 저장소로 기동합니다.
//! 재시작하면 데이터가 사라지므로 로컬 확인 용도로만 사용합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use link_backend::caching::redis::RedisClient;
use link_backend::config::{
    DatabaseConfig, RateLimitConfig, RedisConfig, ServerConfig, TokenConfig,
    VerificationConfig,
};
use link_backend::core::registry::{Service, ServiceLocator};
use link_backend::db::Database;
use link_backend::repositories::memory::{
    MemoryHackathonStore, MemoryRefreshTokenStore, MemoryReservationStore, MemoryTeamStore,
    MemoryUserStore, MemoryVerificationCodeStore,
};
use link_backend::repositories::reservations::ReservationRepository;
use link_backend::repositories::teams::TeamRepository;
use link_backend::repositories::users::UserRepository;
use link_backend::routes::configure_all_routes;
use link_backend::services::auth::{AuthService, PasswordEncoder};
use link_backend::services::mail::MailService;
use link_backend::services::reservations::ReservationService;
use link_backend::services::teams::TeamService;
use link_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 링크 백엔드 시작중...");

    let in_memory = std::env::var("STORAGE")
        .map(|v| v.eq_ignore_ascii_case("memory"))
        .unwrap_or(false);

    let initialized = if in_memory {
        install_memory_services();
        Ok(())
    } else {
        initialize_data_stores().await
    };

    if let Err(e) = initialized {
        error!("❌ 저장소 초기화 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    if let Err(e) = warm_up_services().await {
        error!("❌ 서비스 초기화 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버 구성 및 실행
///
/// 미들웨어는 rate limit, CORS, 접근 로그, 경로 정규화 순으로 감쌉니다.
async fn start_http_server() -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate limit 설정이 올바르지 않습니다 (0 값)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(server_config.workers)
        .run()
        .await
}

/// `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 남깁니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// `RUST_LOG` 기반 로깅 (기본값 `info,actix_web=debug`)
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB/Redis 연결을 등록하고 인덱스를 만든 뒤 리포지토리를 생성합니다.
async fn initialize_data_stores() -> Result<(), Box<dyn std::error::Error>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new(&DatabaseConfig::from_env()).await?);
    let redis_client = Arc::new(RedisClient::new(&RedisConfig::from_env()).await?);

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all().await?;

    UserRepository::instance().create_indexes().await?;
    ReservationRepository::instance().create_indexes().await?;
    TeamRepository::instance().create_indexes().await?;
    info!("✅ 인덱스 생성 완료");

    Ok(())
}

/// 인메모리 저장소로 조립한 서비스를 레지스트리에 등록합니다.
fn install_memory_services() {
    warn!("⚠️ STORAGE=memory: 데이터가 프로세스 메모리에만 저장됩니다");

    let users = Arc::new(MemoryUserStore::new());
    let passwords = PasswordEncoder::from_env();

    ServiceLocator::set(Arc::new(AuthService::new(
        users.clone(),
        Arc::new(MemoryRefreshTokenStore::new()),
        TokenConfig::from_env(),
        passwords,
    )));
    ServiceLocator::set(Arc::new(UserService::new(
        users.clone(),
        Arc::new(MemoryVerificationCodeStore::new()),
        MailService::instance(),
        passwords,
        VerificationConfig::from_env(),
    )));
    ServiceLocator::set(Arc::new(ReservationService::new(
        Arc::new(MemoryReservationStore::new()),
        users,
    )));
    ServiceLocator::set(Arc::new(TeamService::new(
        Arc::new(MemoryHackathonStore::new()),
        Arc::new(MemoryTeamStore::new()),
    )));
}

/// 서비스 싱글톤을 미리 생성해 설정 오류를 첫 요청 전에 드러냅니다.
async fn warm_up_services() -> Result<(), Box<dyn std::error::Error>> {
    AuthService::instance().init().await?;
    UserService::instance().init().await?;
    ReservationService::instance().init().await?;
    TeamService::instance().init().await?;
    Ok(())
}

/// Vue 개발 서버와 자체 서버 origin 허용, 쿠키 포함
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://127.0.0.1:5173")
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
