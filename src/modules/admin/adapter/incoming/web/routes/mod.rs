mod delete_blog_post;
mod delete_project;
mod error_mapping;
mod get_notice;
mod profile;
mod save_blog_post;
mod save_project;
mod seed_content;

pub use delete_blog_post::delete_blog_post_handler;
pub use delete_project::delete_project_handler;
pub use get_notice::get_notice_handler;
pub use profile::{
    get_profile_text_handler, save_contact_info_handler, save_main_info_handler,
    save_profile_text_handler, save_skills_handler, ProfileTextBody, SkillsBody,
};
pub use save_blog_post::{new_blog_post_draft_handler, save_blog_post_handler};
pub use save_project::save_project_handler;
pub use seed_content::{seed_content_handler, SeedResponse};

pub use delete_blog_post::__path_delete_blog_post_handler;
pub use delete_project::__path_delete_project_handler;
pub use get_notice::__path_get_notice_handler;
pub use profile::{
    __path_get_profile_text_handler, __path_save_contact_info_handler,
    __path_save_main_info_handler, __path_save_profile_text_handler, __path_save_skills_handler,
};
pub use save_blog_post::{__path_new_blog_post_draft_handler, __path_save_blog_post_handler};
pub use save_project::__path_save_project_handler;
pub use seed_content::__path_seed_content_handler;
