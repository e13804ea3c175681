use async_trait::async_trait;

use crate::admin::application::domain::{BlogPostRecord, ProjectRecord};
use crate::content::application::domain::entities::{BlogPost, Profile, Project};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentWriterError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("Record not found")]
    NotFound,

    #[error("{0}")]
    DatabaseError(String),

    #[error("Could not encode record: {0}")]
    Serialization(String),
}

/// Write side of the backing store. Every method is a single atomic call.
#[async_trait]
pub trait ContentWriter: Send + Sync {
    fn is_configured(&self) -> bool {
        true
    }

    /// Replaces the single profile row.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), ContentWriterError>;

    /// Inserts when `record.id` is `None`, otherwise overwrites that row.
    /// An id with no stored row is `NotFound`; ids are only ever assigned here.
    /// Returns the stored row with its assigned id.
    async fn upsert_project(&self, record: ProjectRecord) -> Result<Project, ContentWriterError>;

    async fn delete_project(&self, id: i64) -> Result<(), ContentWriterError>;

    async fn upsert_blog_post(
        &self,
        record: BlogPostRecord,
    ) -> Result<BlogPost, ContentWriterError>;

    async fn delete_blog_post(&self, id: i64) -> Result<(), ContentWriterError>;

    /// Swaps every project and blog post for the given lists in one
    /// transaction.
    async fn replace_content(
        &self,
        projects: &[Project],
        blog_posts: &[BlogPost],
    ) -> Result<(), ContentWriterError>;
}
