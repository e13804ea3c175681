mod delete_blog_post_service;
mod delete_project_service;
pub mod editing_context;
pub mod notification_center;
mod save_blog_post_service;
mod save_profile_service;
mod save_project_service;
mod seed_content_service;

pub use delete_blog_post_service::DeleteBlogPostService;
pub use delete_project_service::DeleteProjectService;
pub use editing_context::{EditingContext, NOT_CONFIGURED_NOTICE};
pub use notification_center::NotificationCenter;
pub use save_blog_post_service::SaveBlogPostService;
pub use save_profile_service::SaveProfileService;
pub use save_project_service::SaveProjectService;
pub use seed_content_service::SeedContentService;
