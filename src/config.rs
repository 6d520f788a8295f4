/*
 * Responsibility
 * - 環境変数や設定の読み込み (JWT_SECRET, ポート, CORS 許可, 環境ラベルなど)
 * - 設定値のバリデーション (不足・不正・危険な既定値なら起動失敗)
 * - 起動後は不変。リクエスト毎に再読込しない
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Development-only fallback for `JWT_SECRET`.
pub const INSECURE_DEFAULT_SECRET: &str = "your-secret-key-here";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
    Insecure(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
            ConfigError::Insecure(key) => {
                write!(f, "insecure configuration: {} is left at its default", key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    // Free-form label surfaced by /admin/system-status
    pub environment: String,
    pub cors_allowed_origins: Vec<String>,

    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("environment", &self.environment)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process environment in production).
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match var("ADMIN_API_PORT")
            .or_else(|| var("PORT"))
            .or_else(|| var("FASTAPI_PORT"))
        {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "development".to_string());
        let app_env = AppEnv::from_label(&environment);

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if let Some(raw) = var("JWT_ALGORITHM") {
            check_algorithm(&raw)?;
        }

        let jwt_secret = resolve_secret(var("JWT_SECRET"), app_env)?;

        let jwt_issuer = var("JWT_ISSUER").filter(|s| !s.trim().is_empty());
        let jwt_audience = var("JWT_AUDIENCE").filter(|s| !s.trim().is_empty());

        Ok(Self {
            addr,
            app_env,
            environment,
            cors_allowed_origins,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
        })
    }
}

// The verifier pins HS256. JWT_ALGORITHM may only restate it.
fn check_algorithm(raw: &str) -> Result<(), ConfigError> {
    if raw.trim().eq_ignore_ascii_case("HS256") {
        Ok(())
    } else {
        Err(ConfigError::Invalid("JWT_ALGORITHM"))
    }
}

fn resolve_secret(raw: Option<String>, app_env: AppEnv) -> Result<String, ConfigError> {
    let secret = raw.filter(|s| !s.is_empty());

    match (secret, app_env.is_production()) {
        (Some(s), true) if s == INSECURE_DEFAULT_SECRET => {
            Err(ConfigError::Insecure("JWT_SECRET"))
        }
        (Some(s), _) => {
            if s == INSECURE_DEFAULT_SECRET {
                tracing::warn!("JWT_SECRET is set to the development default; do not deploy this");
            }
            Ok(s)
        }
        (None, true) => Err(ConfigError::Missing("JWT_SECRET")),
        (None, false) => {
            tracing::warn!("JWT_SECRET is not set; falling back to the development default");
            Ok(INSECURE_DEFAULT_SECRET.to_string())
        }
    }
}
