use async_trait::async_trait;

use super::editing_context::{EditingContext, SaveMessages};
use crate::admin::application::domain::{EditSession, ProjectDraft};
use crate::admin::application::ports::incoming::use_cases::{
    SaveError, SaveProjectUseCase, Saved,
};
use crate::admin::application::ports::outgoing::ContentWriter;
use crate::content::application::domain::entities::Project;

const MESSAGES: SaveMessages = SaveMessages {
    created: "Project created successfully!",
    updated: "Project updated successfully!",
    failed: "Error saving project",
};

pub struct SaveProjectService<W>
where
    W: ContentWriter,
{
    writer: W,
    ctx: EditingContext,
}

impl<W> SaveProjectService<W>
where
    W: ContentWriter,
{
    pub fn new(writer: W, ctx: EditingContext) -> Self {
        Self { writer, ctx }
    }
}

#[async_trait]
impl<W> SaveProjectUseCase for SaveProjectService<W>
where
    W: ContentWriter + Send + Sync,
{
    async fn execute(
        &self,
        session: &mut EditSession<ProjectDraft>,
    ) -> Result<Saved<Project>, SaveError> {
        self.ctx
            .run_save(self.writer.is_configured(), session, MESSAGES, |record| {
                self.writer.upsert_project(record)
            })
            .await
    }
}
