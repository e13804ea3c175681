use async_trait::async_trait;

use crate::{
    content::application::{
        domain::entities::{BlogPost, Profile, Project},
        ports::outgoing::{ContentQuery, ContentQueryError},
    },
    shared::backend::UnconfiguredBackend,
};

#[async_trait]
impl ContentQuery for UnconfiguredBackend {
    fn is_configured(&self) -> bool {
        false
    }

    async fn fetch_profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        Err(ContentQueryError::NotConfigured)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        Err(ContentQueryError::NotConfigured)
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError> {
        Err(ContentQueryError::NotConfigured)
    }
}
