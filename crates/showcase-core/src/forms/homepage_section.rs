use crate::media_url::normalize_image_url;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HomepageSectionKey {
    Hero,
    About,
    Services,
    Testimonials,
    Cta,
}

fn default_active() -> bool {
    true
}

/// Homepage section content block
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct StoreHomepageSectionRequest {
    pub section: HomepageSectionKey,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: Option<String>,
    #[validate(length(max = 10000, message = "Content must be at most 10000 characters"))]
    pub content: Option<String>,
    /// Storage path or absolute URL of the section image
    #[validate(length(max = 1000, message = "Image must be at most 1000 characters"))]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 1000, message = "Sort order must be between 0 and 1000"))]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Accepted homepage section with its image resolved to a public URL
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomepageSectionResponse {
    pub section: HomepageSectionKey,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

impl HomepageSectionResponse {
    pub fn from_request(request: StoreHomepageSectionRequest, base_url: &str) -> Self {
        Self {
            image_url: normalize_image_url(request.image.as_deref(), base_url),
            section: request.section,
            title: request.title,
            subtitle: request.subtitle,
            content: request.content,
            sort_order: request.sort_order,
            is_active: request.is_active,
        }
    }
}
