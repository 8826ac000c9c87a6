//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use showcase_core::forms;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Showcase API",
        version = "0.1.0",
        description = "Form intake for a company showcase site: branches, contacts, footer contacts, homepage sections, blog posts and categories, and video links that accept either a URL or a direct upload. All endpoints are versioned under /api/v1/."
    ),
    paths(
        handlers::video_links::create_video_link,
        handlers::branches::store_branch,
        handlers::contacts::store_contact,
        handlers::footer_contacts::store_footer_contact,
        handlers::homepage_sections::store_homepage_section,
        handlers::blog::store_blog_post,
        handlers::blog::store_blog_category,
    ),
    components(
        schemas(
            error::ErrorResponse,
            forms::VideoLinkResponse,
            forms::VideoSource,
            forms::StoreBranchRequest,
            forms::BranchStatus,
            forms::StoreContactRequest,
            forms::StoreFooterContactRequest,
            forms::FooterContactKind,
            forms::StoreHomepageSectionRequest,
            forms::HomepageSectionKey,
            forms::HomepageSectionResponse,
            forms::StoreBlogPostRequest,
            forms::StoreBlogCategoryRequest,
            forms::BlogPostResponse,
        )
    ),
    tags(
        (name = "video-links", description = "Video links backed by a URL or an uploaded file"),
        (name = "branches", description = "Branch offices"),
        (name = "contacts", description = "Contact form submissions"),
        (name = "footer-contacts", description = "Footer contact entries"),
        (name = "homepage-sections", description = "Homepage content blocks"),
        (name = "blog", description = "Blog posts and categories")
    )
)]
pub struct ApiDoc;
