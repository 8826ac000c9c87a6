//! Form requests
//!
//! Each request type declares its constraints with `validator`'s derive. The video-link
//! form additionally runs the polymorphic media check on its `video` field.

pub mod blog;
pub mod branch;
pub mod contact;
pub mod footer_contact;
pub mod homepage_section;
pub mod video_link;

pub use blog::{BlogPostResponse, StoreBlogCategoryRequest, StoreBlogPostRequest};
pub use branch::{BranchStatus, StoreBranchRequest};
pub use contact::StoreContactRequest;
pub use footer_contact::{FooterContactKind, StoreFooterContactRequest};
pub use homepage_section::{HomepageSectionKey, HomepageSectionResponse, StoreHomepageSectionRequest};
pub use video_link::{CreateVideoLinkRequest, VideoLinkResponse, VideoSource, VIDEO_ATTRIBUTE};
