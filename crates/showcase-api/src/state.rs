//! Application state shared by all handlers.

use crate::utils::upload::UploadPolicy;
use showcase_core::{Config, MediaLimits};

pub struct AppState {
    pub config: Config,
    /// Limits for the polymorphic video field
    pub media_limits: MediaLimits,
    pub upload_policy: UploadPolicy,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let media_limits = MediaLimits::new(config.upload_max_filesize_label());
        let upload_policy = UploadPolicy::from_config(&config);
        Self {
            config,
            media_limits,
            upload_policy,
        }
    }
}
