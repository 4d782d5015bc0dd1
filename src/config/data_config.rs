//! 서버 및 데이터 설정 관리 모듈
//!
//! 서버 바인딩, MongoDB 연결, Rate Limiting, CORS 설정을 관리합니다.

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_NAME: &str = "user_management";
pub const DEFAULT_HTTP_WORKERS: usize = 4;
pub const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 100;
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 200;

/// 설정 로드 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("{0} is not set")]
    MissingVar(&'static str),

    /// 값 파싱 실패
    #[error("{name} has an invalid value: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: DEFAULT_RATE_LIMIT_PER_SECOND,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

/// 애플리케이션 설정
///
/// # 예제
///
/// ```rust,ignore
/// let config = AppConfig::from_env()?;
/// println!("{}:{}", config.host, config.port);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database_name: String,
    pub http_workers: usize,
    pub rate_limit: RateLimitConfig,
    /// 비어 있으면 모든 Origin 허용
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 임의의 조회 함수에서 설정을 읽습니다.
    ///
    /// 빈 문자열 값은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mongo_uri = get("MONGO_URI")
            .or_else(|| get("MONGODB_URI"))
            .ok_or(ConfigError::MissingVar("MONGO_URI"))?;

        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let http_workers = match get("HTTP_WORKERS") {
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|workers| *workers > 0)
                .ok_or(ConfigError::InvalidVar { name: "HTTP_WORKERS", value })?,
            None => DEFAULT_HTTP_WORKERS,
        };

        let rate_limit = RateLimitConfig {
            per_second: parse_or_default(
                "RATE_LIMIT_PER_SECOND",
                get("RATE_LIMIT_PER_SECOND"),
                DEFAULT_RATE_LIMIT_PER_SECOND,
            ),
            burst_size: parse_or_default(
                "RATE_LIMIT_BURST_SIZE",
                get("RATE_LIMIT_BURST_SIZE"),
                DEFAULT_RATE_LIMIT_BURST_SIZE,
            ),
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongo_uri,
            database_name: get("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            http_workers,
            rate_limit,
            cors_allowed_origins,
        })
    }
}

/// 파싱 실패 시 에러를 로그로 남기고 기본값을 사용합니다.
fn parse_or_default<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        None => default,
    }
}
