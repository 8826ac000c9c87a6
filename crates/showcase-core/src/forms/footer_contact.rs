use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FooterContactKind {
    Phone,
    Email,
    Address,
    Social,
}

/// Footer contact entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct StoreFooterContactRequest {
    #[serde(rename = "type")]
    pub kind: FooterContactKind,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Label must be between 1 and 100 characters"))]
    pub label: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Value must be between 1 and 255 characters"))]
    pub value: String,
    #[validate(length(max = 100, message = "Icon must be at most 100 characters"))]
    pub icon: Option<String>,
}
