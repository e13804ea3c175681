use async_trait::async_trait;

use crate::content::application::domain::entities::{BlogPost, Profile, Project};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Malformed {entity} record: {message}")]
    Malformed {
        entity: &'static str,
        message: String,
    },
}

/// Read side of the backing store for public content.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Whether a store is reachable at all. When false no other method is
    /// called.
    fn is_configured(&self) -> bool {
        true
    }

    /// The single profile row, if one has been written.
    async fn fetch_profile(&self) -> Result<Option<Profile>, ContentQueryError>;

    /// All projects, ascending by id.
    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError>;

    /// All blog posts in backend date order (descending on the date column).
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError>;
}
