//! Configuration module
//!
//! Configuration is read from the environment (with `.env` support via `dotenvy`) once at
//! startup and validated before the server binds.

use std::env;
use std::path::PathBuf;

const SERVER_PORT: u16 = 4000;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const REQUEST_TIMEOUT_SECS: u64 = 60;
const UPLOAD_MAX_FILESIZE: &str = "100M";
const POST_MAX_SIZE: &str = "128M";
const BLOCKED_UPLOAD_EXTENSIONS: &str = "php,phtml,phar,exe,sh,bat,cmd";
const APP_URL: &str = "http://localhost:4000";

/// Console log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Public base URL; stored image paths are resolved against it.
    pub app_url: String,
    pub http_concurrency_limit: usize,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

/// Multipart upload handling
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Server upload limit as written in configuration (e.g. `100M`)
    pub max_filesize_label: String,
    pub max_filesize_bytes: u64,
    /// Upper bound on a whole request body, every part included
    pub max_request_bytes: u64,
    /// Directory uploads are spooled to; `None` means the system temp dir.
    pub tmp_dir: Option<PathBuf>,
    /// Lowercase file extensions that are refused before any bytes are stored
    pub blocked_extensions: Vec<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub uploads: UploadConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            app_url: env::var("APP_URL").unwrap_or_else(|_| APP_URL.to_string()),
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(REQUEST_TIMEOUT_SECS)
                .max(1),
            log_format,
        };

        let max_filesize_label =
            env::var("UPLOAD_MAX_FILESIZE").unwrap_or_else(|_| UPLOAD_MAX_FILESIZE.to_string());
        let max_filesize_bytes = parse_size_shorthand(&max_filesize_label).ok_or_else(|| {
            anyhow::anyhow!(
                "UPLOAD_MAX_FILESIZE must be a byte count with an optional K, M or G suffix (got '{}')",
                max_filesize_label
            )
        })?;

        let post_max_size =
            env::var("POST_MAX_SIZE").unwrap_or_else(|_| POST_MAX_SIZE.to_string());
        let max_request_bytes = parse_size_shorthand(&post_max_size).ok_or_else(|| {
            anyhow::anyhow!(
                "POST_MAX_SIZE must be a byte count with an optional K, M or G suffix (got '{}')",
                post_max_size
            )
        })?;

        let uploads = UploadConfig {
            max_filesize_label,
            max_filesize_bytes,
            max_request_bytes,
            tmp_dir: env::var("UPLOAD_TMP_DIR").ok().map(PathBuf::from),
            blocked_extensions: parse_extension_list(
                &env::var("BLOCKED_UPLOAD_EXTENSIONS")
                    .unwrap_or_else(|_| BLOCKED_UPLOAD_EXTENSIONS.to_string()),
            ),
        };

        let config = Config { base, uploads };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.base.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.uploads.max_filesize_bytes == 0 {
            return Err(anyhow::anyhow!("UPLOAD_MAX_FILESIZE cannot be 0"));
        }

        if self.uploads.max_request_bytes < self.uploads.max_filesize_bytes {
            tracing::warn!(
                post_max_size = self.uploads.max_request_bytes,
                upload_max_filesize = self.uploads.max_filesize_bytes,
                "POST_MAX_SIZE is smaller than UPLOAD_MAX_FILESIZE - large uploads are cut off before the per-file limit applies"
            );
        }

        if !self.base.app_url.starts_with("http://") && !self.base.app_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "APP_URL must be an absolute http(s) URL (got '{}')",
                self.base.app_url
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.base.environment
    }

    pub fn app_url(&self) -> &str {
        &self.base.app_url
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.base.http_concurrency_limit
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.base.request_timeout_secs
    }

    pub fn log_format(&self) -> LogFormat {
        self.base.log_format
    }

    pub fn upload_max_filesize_label(&self) -> &str {
        &self.uploads.max_filesize_label
    }

    pub fn upload_max_filesize_bytes(&self) -> u64 {
        self.uploads.max_filesize_bytes
    }

    pub fn max_request_bytes(&self) -> u64 {
        self.uploads.max_request_bytes
    }

    pub fn upload_tmp_dir(&self) -> PathBuf {
        self.uploads
            .tmp_dir
            .clone()
            .unwrap_or_else(env::temp_dir)
    }

    pub fn blocked_upload_extensions(&self) -> &[String] {
        &self.uploads.blocked_extensions
    }
}

/// Parse a size such as `100M`, `512k`, `2G` or `1048576` into bytes.
pub fn parse_size_shorthand(value: &str) -> Option<u64> {
    let value = value.trim();
    let (digits, multiplier) = match value.chars().last()? {
        'k' | 'K' => (&value[..value.len() - 1], 1024),
        'm' | 'M' => (&value[..value.len() - 1], 1024 * 1024),
        'g' | 'G' => (&value[..value.len() - 1], 1024 * 1024 * 1024),
        _ => (value, 1),
    };
    digits.trim().parse::<u64>().ok()?.checked_mul(multiplier)
}

fn parse_extension_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
