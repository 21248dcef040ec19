use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("环境变量 {key} 的值无效: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub relay_port: u16,
    pub products_path: PathBuf,
    pub cache_path: PathBuf,
    pub static_dir: PathBuf,
    pub cors_origin: HeaderValue,
    pub session_cookie_name: String,
    pub session_ttl_secs: u64,
    pub cache_ttl_secs: u64,
    pub bcrypt_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 3000,
            relay_port: 8080,
            products_path: PathBuf::from("data/products.json"),
            cache_path: PathBuf::from("data/cache.json"),
            static_dir: PathBuf::from("static"),
            cors_origin: HeaderValue::from_static("http://localhost:5173"),
            session_cookie_name: "dashboard.sid".into(),
            session_ttl_secs: 3600,
            cache_ttl_secs: 60,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    /// 读取 `.env` 与环境变量，未设置的项使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        Ok(Config {
            server_host: parse_or("SERVER_HOST", defaults.server_host)?,
            server_port: parse_or("SERVER_PORT", defaults.server_port)?,
            relay_port: parse_or("RELAY_PORT", defaults.relay_port)?,
            products_path: env::var("PRODUCTS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.products_path),
            cache_path: env::var("CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_path),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_origin: origin_or("CORS_ORIGIN", defaults.cors_origin)?,
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or(defaults.session_cookie_name),
            session_ttl_secs: parse_or("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
            cache_ttl_secs: parse_or("CACHE_TTL_SECS", defaults.cache_ttl_secs)?,
            bcrypt_cost: parse_or("BCRYPT_COST", defaults.bcrypt_cost)?,
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(key, env::var(key).ok(), default)
}

fn origin_or(key: &'static str, default: HeaderValue) -> Result<HeaderValue, ConfigError> {
    parse_origin(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => {
            tracing::debug!("{key} 未设置，使用默认值");
            Ok(default)
        }
    }
}

/// 浏览器来源必须形如 `http(s)://host[:port]`
fn parse_origin(
    key: &'static str,
    raw: Option<String>,
    default: HeaderValue,
) -> Result<HeaderValue, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let origin = raw.trim();
    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::Invalid {
            key,
            reason: format!("{origin} 缺少 http:// 或 https:// 前缀"),
        })?;
    if host.is_empty() || host.contains(['/', ' ']) {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("{origin} 不是合法的来源"),
        });
    }
    parse_value(key, Some(origin.to_string()), default)
}
