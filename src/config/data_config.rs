//! 서버 및 세션 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 세션 저장소 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 세션 쿠키에 `Secure` 속성을 붙여야 하는지 여부
    pub fn secure_cookies(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }

    /// `RUST_LOG`가 없을 때 사용할 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "info,actix_web=debug",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8888
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8888".to_string())
            .parse()
            .unwrap_or(8888)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 세션 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    /// 프로세스 메모리 (재시작 시 세션 소멸)
    Memory,
    /// Redis (`REDIS_URL`)
    Redis,
}

impl SessionBackend {
    /// 알 수 없는 값은 `Memory`로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "redis" => SessionBackend::Redis,
            _ => SessionBackend::Memory,
        }
    }
}

/// 세션 관련 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 키를 담는 쿠키 이름
    pub const COOKIE_NAME: &'static str = "user";

    /// 기본 세션 유지 시간 (30일)
    pub const DEFAULT_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

    /// 세션 유지 시간 상한 (10년)
    pub const MAX_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

    /// `SESSION_STORE` 환경 변수 (`memory` | `redis`, 기본값 `memory`)
    pub fn backend() -> SessionBackend {
        SessionBackend::from_str(&env::var("SESSION_STORE").unwrap_or_else(|_| "memory".to_string()))
    }

    /// Redis 연결 URL. 기본값: `redis://127.0.0.1:6379`
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
    }

    /// `SESSION_TTL_SECONDS`. [`Self::MAX_TTL_SECONDS`]를 넘으면 상한으로 고정합니다.
    pub fn ttl_seconds() -> u64 {
        Self::parse_ttl(env::var("SESSION_TTL_SECONDS").ok().as_deref())
    }

    fn parse_ttl(raw: Option<&str>) -> u64 {
        raw.and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_TTL_SECONDS)
            .min(Self::MAX_TTL_SECONDS)
    }
}

/// 웹 계층이 요청마다 참조하는 설정 묶음
///
/// `main`에서 한 번 읽어 `web::Data`로 공유합니다.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// 고정 콜백 URL. `None`이면 요청의 scheme/host 로 만듭니다.
    pub redirect_uri: Option<String>,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
}

impl AppSettings {
    pub fn from_env() -> Self {
        Self {
            redirect_uri: crate::config::DisqusOAuthConfig::redirect_uri(),
            session_ttl: Duration::from_secs(SessionConfig::ttl_seconds()),
            secure_cookies: Environment::current().secure_cookies(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            redirect_uri: None,
            session_ttl: Duration::from_secs(SessionConfig::DEFAULT_TTL_SECONDS),
            secure_cookies: false,
        }
    }
}
