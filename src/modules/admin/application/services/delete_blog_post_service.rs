use async_trait::async_trait;

use super::editing_context::{DeleteMessages, EditingContext};
use crate::admin::application::domain::Confirmation;
use crate::admin::application::ports::incoming::use_cases::{
    DeleteBlogPostUseCase, DeleteError, DeleteOutcome,
};
use crate::admin::application::ports::outgoing::ContentWriter;

const MESSAGES: DeleteMessages = DeleteMessages {
    deleted: "Post deleted successfully",
    failed: "Error deleting post",
};

pub struct DeleteBlogPostService<W>
where
    W: ContentWriter,
{
    writer: W,
    ctx: EditingContext,
}

impl<W> DeleteBlogPostService<W>
where
    W: ContentWriter,
{
    pub fn new(writer: W, ctx: EditingContext) -> Self {
        Self { writer, ctx }
    }
}

#[async_trait]
impl<W> DeleteBlogPostUseCase for DeleteBlogPostService<W>
where
    W: ContentWriter + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, DeleteError> {
        self.ctx
            .run_delete(
                self.writer.is_configured(),
                confirmation,
                MESSAGES,
                self.writer.delete_blog_post(id),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_store::InMemoryContentStore;

    #[tokio::test]
    async fn declined_confirmation_leaves_posts_unchanged() {
        // Arrange
        let store = InMemoryContentStore::new();
        store.put_blog_post(InMemoryContentStore::sample_post(7, "Jan 05, 2024"));
        store.put_blog_post(InMemoryContentStore::sample_post(8, "Feb 05, 2024"));
        let ctx = store.editing_context();
        let service = DeleteBlogPostService::new(store.clone(), ctx.clone());

        // Act
        let outcome = service.execute(7, Confirmation::Declined).await.unwrap();

        // Assert
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.blog_post_ids(), vec![7, 8]);
        assert!(ctx.notices.active().is_none());
    }

    #[tokio::test]
    async fn confirmed_delete_reports_post_notice() {
        // Arrange
        let store = InMemoryContentStore::new();
        store.put_blog_post(InMemoryContentStore::sample_post(7, "Jan 05, 2024"));
        store.put_blog_post(InMemoryContentStore::sample_post(8, "Feb 05, 2024"));
        let ctx = store.editing_context();
        let service = DeleteBlogPostService::new(store.clone(), ctx.clone());

        // Act
        let outcome = service.execute(7, Confirmation::Confirmed).await.unwrap();

        // Assert
        assert!(matches!(outcome, DeleteOutcome::Deleted(ref n) if n.text == "Post deleted successfully"));
        assert_eq!(store.blog_post_ids(), vec![8]);
        let ids: Vec<i64> = ctx
            .content
            .current()
            .await
            .view
            .blog_posts
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![8]);
    }

    #[tokio::test]
    async fn backend_failure_leaves_posts_untouched() {
        // Arrange
        let store = InMemoryContentStore::new();
        store.put_blog_post(InMemoryContentStore::sample_post(7, "Jan 05, 2024"));
        store.fail_writes_with("permission denied for table blogs");
        let ctx = store.editing_context();
        let service = DeleteBlogPostService::new(store.clone(), ctx.clone());

        // Act
        let result = service.execute(7, Confirmation::Confirmed).await;

        // Assert
        assert_eq!(
            result,
            Err(DeleteError::Remote("permission denied for table blogs".to_string()))
        );
        assert_eq!(store.blog_post_ids(), vec![7]);
        assert_eq!(
            ctx.notices.active().unwrap().text,
            "permission denied for table blogs"
        );
    }
}
