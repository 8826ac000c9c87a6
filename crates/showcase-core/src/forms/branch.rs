use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BranchStatus {
    Active,
    Inactive,
}

/// Request DTO for creating a branch office
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct StoreBranchRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Branch name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 500,
        message = "Address must be between 1 and 500 characters"
    ))]
    pub address: String,
    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(
        url(message = "Map URL must be a valid URL"),
        length(max = 1000, message = "Map URL must be at most 1000 characters")
    )]
    pub map_url: Option<String>,
    pub status: BranchStatus,
}
