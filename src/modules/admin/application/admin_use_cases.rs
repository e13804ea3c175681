use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    DeleteBlogPostUseCase, DeleteProjectUseCase, SaveBlogPostUseCase, SaveProfileUseCase,
    SaveProjectUseCase, SeedContentUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub save_project: Arc<dyn SaveProjectUseCase + Send + Sync>,
    pub delete_project: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub save_blog_post: Arc<dyn SaveBlogPostUseCase + Send + Sync>,
    pub delete_blog_post: Arc<dyn DeleteBlogPostUseCase + Send + Sync>,
    pub save_profile: Arc<dyn SaveProfileUseCase + Send + Sync>,
    pub seed: Arc<dyn SeedContentUseCase + Send + Sync>,
}
