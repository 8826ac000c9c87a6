use crate::media_url::normalize_image_url;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Blog post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct StoreBlogPostRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(
        regex(
            path = *SLUG_PATTERN,
            message = "Slug may only contain lowercase letters, digits and single hyphens"
        ),
        length(max = 255, message = "Slug must be at most 255 characters")
    )]
    pub slug: Option<String>,
    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    #[validate(length(max = 1000, message = "Cover image must be at most 1000 characters"))]
    pub cover_image: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "At most 20 tags are allowed"))]
    pub tags: Vec<String>,
}

impl StoreBlogPostRequest {
    /// Run the declarative rules and require a usable slug. A title with no ASCII letters
    /// or digits yields no slug, so one must be given explicitly.
    pub fn validate_with_slug(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.slug.is_none() && !self.title.is_empty() && slugify(&self.title).is_empty() {
            let mut error = ValidationError::new("slug_required");
            error.message = Some(Cow::Borrowed(
                "The slug field is required when the title has no letters or digits.",
            ));
            errors.add("slug", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Blog category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct StoreBlogCategoryRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Accepted blog post; the slug is derived from the title when omitted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogPostResponse {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
}

impl BlogPostResponse {
    pub fn from_request(request: StoreBlogPostRequest, base_url: &str) -> Self {
        let slug = request
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&request.title));
        Self {
            cover_image_url: normalize_image_url(request.cover_image.as_deref(), base_url),
            title: request.title,
            slug,
            excerpt: request.excerpt,
            body: request.body,
            tags: request.tags,
        }
    }
}

/// Lowercase ASCII kebab-case form of `title`.
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
