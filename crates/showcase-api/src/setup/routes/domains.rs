//! Form route groups.

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub fn form_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/branches", API_PREFIX),
            post(handlers::branches::store_branch),
        )
        .route(
            &format!("{}/contacts", API_PREFIX),
            post(handlers::contacts::store_contact),
        )
        .route(
            &format!("{}/footer-contacts", API_PREFIX),
            post(handlers::footer_contacts::store_footer_contact),
        )
        .route(
            &format!("{}/homepage-sections", API_PREFIX),
            post(handlers::homepage_sections::store_homepage_section),
        )
}

pub fn blog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/blog/posts", API_PREFIX),
            post(handlers::blog::store_blog_post),
        )
        .route(
            &format!("{}/blog/categories", API_PREFIX),
            post(handlers::blog::store_blog_category),
        )
}

pub fn video_link_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        &format!("{}/video-links", API_PREFIX),
        post(handlers::video_links::create_video_link),
    )
}
