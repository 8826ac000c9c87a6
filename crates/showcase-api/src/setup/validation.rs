//! Configuration validation
//!
//! Runs at startup, after `Config::from_env`, to catch settings that parse but make no
//! sense together.

use anyhow::Result;
use showcase_core::Config;
use std::path::Path;

pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let is_production = config.is_production();
    let env_var = std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .ok();
    if is_production && env_var.is_none() {
        tracing::warn!(
            "Production mode detected but ENVIRONMENT/APP_ENV not set - error details may leak"
        );
    }

    if config.http_concurrency_limit() == 0 {
        return Err(anyhow::anyhow!("HTTP concurrency limit cannot be 0"));
    }

    // A missing temp dir is not fatal: uploads then fail with the missing-temp-folder message
    let tmp_dir = config.upload_tmp_dir();
    if !Path::new(&tmp_dir).is_dir() {
        tracing::warn!(
            tmp_dir = %tmp_dir.display(),
            "UPLOAD_TMP_DIR does not exist - file uploads will be rejected"
        );
    }

    if config.blocked_upload_extensions().is_empty() {
        tracing::warn!("BLOCKED_UPLOAD_EXTENSIONS is empty - every file extension is accepted");
    }

    Ok(())
}
