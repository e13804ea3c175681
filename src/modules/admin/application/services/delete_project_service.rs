use async_trait::async_trait;

use super::editing_context::{DeleteMessages, EditingContext};
use crate::admin::application::domain::Confirmation;
use crate::admin::application::ports::incoming::use_cases::{
    DeleteError, DeleteOutcome, DeleteProjectUseCase,
};
use crate::admin::application::ports::outgoing::ContentWriter;

const MESSAGES: DeleteMessages = DeleteMessages {
    deleted: "Project deleted successfully",
    failed: "Error deleting project",
};

pub struct DeleteProjectService<W>
where
    W: ContentWriter,
{
    writer: W,
    ctx: EditingContext,
}

impl<W> DeleteProjectService<W>
where
    W: ContentWriter,
{
    pub fn new(writer: W, ctx: EditingContext) -> Self {
        Self { writer, ctx }
    }
}

#[async_trait]
impl<W> DeleteProjectUseCase for DeleteProjectService<W>
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
                self.writer.delete_project(id),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::application::domain::NoticeKind;
    use crate::content::application::services::SliceSource;
    use crate::tests::support::in_memory_store::InMemoryContentStore;

    fn store_with_projects(ids: &[i64]) -> InMemoryContentStore {
        let store = InMemoryContentStore::new();
        for id in ids {
            store.put_project(InMemoryContentStore::sample_project(*id, "Stored"));
        }
        store
    }

    #[tokio::test]
    async fn declined_confirmation_sends_nothing() {
        // Arrange
        let store = store_with_projects(&[3]);
        let ctx = store.editing_context();
        let service = DeleteProjectService::new(store.clone(), ctx.clone());

        // Act
        let outcome = service.execute(3, Confirmation::Declined).await.unwrap();

        // Assert
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.project_ids(), vec![3]);
        assert!(ctx.notices.active().is_none());
    }

    #[tokio::test]
    async fn confirmed_delete_removes_and_refreshes() {
        // Arrange
        let store = store_with_projects(&[3, 5]);
        let ctx = store.editing_context();
        ctx.content.load().await;
        let service = DeleteProjectService::new(store.clone(), ctx.clone());

        // Act
        let outcome = service.execute(3, Confirmation::Confirmed).await.unwrap();

        // Assert
        match outcome {
            DeleteOutcome::Deleted(notice) => {
                assert_eq!(notice.kind, NoticeKind::Success);
                assert_eq!(notice.text, "Project deleted successfully");
            }
            other => panic!("expected deletion, got {other:?}"),
        }
        let ids: Vec<i64> = ctx
            .content
            .current()
            .await
            .view
            .projects
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![5]);
    }

    #[tokio::test]
    async fn deleting_last_project_falls_back_to_defaults() {
        // Arrange
        let store = store_with_projects(&[3]);
        let ctx = store.editing_context();
        let service = DeleteProjectService::new(store.clone(), ctx.clone());

        // Act
        service.execute(3, Confirmation::Confirmed).await.unwrap();

        // Assert
        let snapshot = ctx.content.current().await;
        assert_eq!(snapshot.sources.projects, SliceSource::Defaults);
        assert_eq!(snapshot.view.projects, ctx.content.defaults().projects);
    }

    #[tokio::test]
    async fn missing_row_is_reported_with_error_notice() {
        // Arrange
        let store = store_with_projects(&[]);
        let ctx = store.editing_context();
        let service = DeleteProjectService::new(store.clone(), ctx.clone());

        // Act
        let result = service.execute(42, Confirmation::Confirmed).await;

        // Assert
        assert_eq!(result, Err(DeleteError::NotFound));
        assert_eq!(ctx.notices.active().unwrap().kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn unconfigured_backend_refuses_after_confirmation() {
        // Arrange
        let store = InMemoryContentStore::unconfigured();
        let ctx = store.editing_context();
        let service = DeleteProjectService::new(store.clone(), ctx.clone());

        // Act
        let declined = service.execute(1, Confirmation::Declined).await;
        let confirmed = service.execute(1, Confirmation::Confirmed).await;

        // Assert
        assert_eq!(declined, Ok(DeleteOutcome::Cancelled));
        assert_eq!(confirmed, Err(DeleteError::NotConfigured));
        assert_eq!(ctx.notices.active().unwrap().text, "Backend not configured");
    }
}
