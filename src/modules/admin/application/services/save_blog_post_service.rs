use async_trait::async_trait;

use super::editing_context::{EditingContext, SaveMessages};
use crate::admin::application::domain::{BlogPostDraft, EditSession};
use crate::admin::application::ports::incoming::use_cases::{
    SaveBlogPostUseCase, SaveError, Saved,
};
use crate::admin::application::ports::outgoing::ContentWriter;
use crate::content::application::domain::entities::BlogPost;

const MESSAGES: SaveMessages = SaveMessages {
    created: "Post created successfully!",
    updated: "Post updated successfully!",
    failed: "Error saving post",
};

pub struct SaveBlogPostService<W>
where
    W: ContentWriter,
{
    writer: W,
    ctx: EditingContext,
}

impl<W> SaveBlogPostService<W>
where
    W: ContentWriter,
{
    pub fn new(writer: W, ctx: EditingContext) -> Self {
        Self { writer, ctx }
    }
}

#[async_trait]
impl<W> SaveBlogPostUseCase for SaveBlogPostService<W>
where
    W: ContentWriter + Send + Sync,
{
    async fn execute(
        &self,
        session: &mut EditSession<BlogPostDraft>,
    ) -> Result<Saved<BlogPost>, SaveError> {
        self.ctx
            .run_save(self.writer.is_configured(), session, MESSAGES, |record| {
                self.writer.upsert_blog_post(record)
            })
            .await
    }
}
