use async_trait::async_trait;

use crate::admin::application::domain::{BlogPostRecord, ProjectRecord};
use crate::admin::application::ports::outgoing::{ContentWriter, ContentWriterError};
use crate::content::application::domain::entities::{BlogPost, Profile, Project};
use crate::shared::backend::UnconfiguredBackend;

#[async_trait]
impl ContentWriter for UnconfiguredBackend {
    fn is_configured(&self) -> bool {
        false
    }

    async fn upsert_profile(&self, _profile: &Profile) -> Result<(), ContentWriterError> {
        Err(ContentWriterError::NotConfigured)
    }

    async fn upsert_project(&self, _record: ProjectRecord) -> Result<Project, ContentWriterError> {
        Err(ContentWriterError::NotConfigured)
    }

    async fn delete_project(&self, _id: i64) -> Result<(), ContentWriterError> {
        Err(ContentWriterError::NotConfigured)
    }

    async fn upsert_blog_post(
        &self,
        _record: BlogPostRecord,
    ) -> Result<BlogPost, ContentWriterError> {
        Err(ContentWriterError::NotConfigured)
    }

    async fn delete_blog_post(&self, _id: i64) -> Result<(), ContentWriterError> {
        Err(ContentWriterError::NotConfigured)
    }

    async fn replace_content(
        &self,
        _projects: &[Project],
        _blog_posts: &[BlogPost],
    ) -> Result<(), ContentWriterError> {
        Err(ContentWriterError::NotConfigured)
    }
}
