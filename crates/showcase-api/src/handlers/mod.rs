pub mod blog;
pub mod branches;
pub mod contacts;
pub mod footer_contacts;
pub mod homepage_sections;
pub mod video_links;
