use async_trait::async_trait;
use tracing::{info, warn};

use super::editing_context::EditingContext;
use crate::admin::application::domain::Confirmation;
use crate::admin::application::ports::incoming::use_cases::{
    SeedContentUseCase, SeedError, SeedOutcome,
};
use crate::admin::application::ports::outgoing::{ContentWriter, ContentWriterError};
use crate::shared::deadline::with_deadline;

const SEEDED: &str = "Database seeded successfully!";
const SEED_FAILED: &str = "Error seeding database";

/// Writes the built-in profile, projects and posts over whatever is stored.
pub struct SeedContentService<W>
where
    W: ContentWriter,
{
    writer: W,
    ctx: EditingContext,
}

impl<W> SeedContentService<W>
where
    W: ContentWriter,
{
    pub fn new(writer: W, ctx: EditingContext) -> Self {
        Self { writer, ctx }
    }

    async fn write_bundle(&self) -> Result<(), ContentWriterError> {
        let bundle = self.ctx.content.defaults();
        self.writer.upsert_profile(&bundle.profile).await?;
        self.writer
            .replace_content(&bundle.projects, &bundle.blog_posts)
            .await
    }
}

#[async_trait]
impl<W> SeedContentUseCase for SeedContentService<W>
where
    W: ContentWriter + Send + Sync,
{
    async fn execute(&self, confirmation: Confirmation) -> Result<SeedOutcome, SeedError> {
        if !confirmation.is_confirmed() {
            info!("Seed cancelled by operator");
            return Ok(SeedOutcome::Cancelled);
        }

        if !self.writer.is_configured() {
            self.ctx.refuse_unconfigured();
            return Err(SeedError::NotConfigured);
        }

        match with_deadline(self.ctx.write_timeout, self.write_bundle()).await {
            Ok(()) => {
                let bundle = self.ctx.content.defaults();
                let (projects, blog_posts) = (bundle.projects.len(), bundle.blog_posts.len());
                info!(projects, blog_posts, "Content seeded from built-in bundle");

                let notice = self.ctx.notices.success(SEEDED);
                self.ctx.content.refresh().await;
                Ok(SeedOutcome::Seeded {
                    notice,
                    projects,
                    blog_posts,
                })
            }
            Err(err) => {
                let err = SeedError::from(err);
                warn!(error = %err, "Seed failed");
                self.ctx.notify_failure(&err, SEED_FAILED);
                Err(err)
            }
        }
    }
}
