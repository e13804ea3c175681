use async_trait::async_trait;

use super::editing_context::{EditingContext, SaveMessages};
use crate::admin::application::domain::{EditSession, ProfileDraft};
use crate::admin::application::ports::incoming::use_cases::{
    SaveError, SaveProfileUseCase, Saved,
};
use crate::admin::application::ports::outgoing::ContentWriter;
use crate::content::application::domain::entities::Profile;

pub struct SaveProfileService<W>
where
    W: ContentWriter,
{
    writer: W,
    ctx: EditingContext,
}

impl<W> SaveProfileService<W>
where
    W: ContentWriter,
{
    pub fn new(writer: W, ctx: EditingContext) -> Self {
        Self { writer, ctx }
    }
}

#[async_trait]
impl<W> SaveProfileUseCase for SaveProfileService<W>
where
    W: ContentWriter + Send + Sync,
{
    async fn execute(
        &self,
        session: &mut EditSession<ProfileDraft>,
    ) -> Result<Saved<Profile>, SaveError> {
        let edit = &session.draft().edit;
        let messages = SaveMessages {
            created: edit.saved_message(),
            updated: edit.saved_message(),
            failed: edit.failed_message(),
        };

        self.ctx
            .run_save(
                self.writer.is_configured(),
                session,
                messages,
                |profile| async move { self.writer.upsert_profile(&profile).await.map(|()| profile) },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::application::domain::{
        MainInfoForm, NoticeKind, ProfileEdit, ProfileText, SessionState,
    };
    use crate::tests::support::in_memory_store::InMemoryContentStore;

    #[tokio::test]
    async fn main_form_paragraphs_are_saved_as_list() {
        // Arrange
        let store = InMemoryContentStore::new();
        let ctx = store.editing_context();
        let service = SaveProfileService::new(store.clone(), ctx.clone());

        let current = ctx.content.current().await.view.profile.clone();
        let mut form = MainInfoForm::from_profile(&current);
        form.description = "Para one.\n\nPara two.".to_string();
        let mut session =
            EditSession::open_existing(ProfileDraft::new(current, ProfileEdit::Main(form)));

        // Act
        let saved = service.execute(&mut session).await.unwrap();

        // Assert
        assert_eq!(saved.notice.text, "Main section updated successfully!");
        let stored = store.profile().unwrap();
        assert_eq!(stored.about.description, vec!["Para one.", "Para two."]);
        let view = ctx.content.current().await.view;
        assert_eq!(view.profile.about.description, vec!["Para one.", "Para two."]);
    }

    #[tokio::test]
    async fn invalid_raw_text_mutates_nothing() {
        // Arrange
        let store = InMemoryContentStore::new();
        let ctx = store.editing_context();
        let service = SaveProfileService::new(store.clone(), ctx.clone());
        let base = ctx.content.defaults().profile.clone();
        let mut session = EditSession::open_existing(ProfileDraft::new(
            base,
            ProfileEdit::Raw(ProfileText("not json".to_string())),
        ));

        // Act
        let result = service.execute(&mut session).await;

        // Assert
        match result {
            Err(SaveError::Validation(e)) => assert_eq!(e.to_string(), "Invalid JSON format"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.write_count(), 0);
        assert!(store.profile().is_none());
        assert_eq!(session.state(), SessionState::Open);
    }

    #[tokio::test]
    async fn raw_round_trip_reloads_equal_profile() {
        // Arrange
        let store = InMemoryContentStore::new();
        let ctx = store.editing_context();
        let service = SaveProfileService::new(store.clone(), ctx.clone());

        let mut edited = ctx.content.defaults().profile.clone();
        edited.name = "Sam Rivera".to_string();
        edited.currently_learning = Some(vec!["Elixir".to_string()]);
        let mut session = EditSession::open_existing(ProfileDraft::new(
            ctx.content.defaults().profile.clone(),
            ProfileEdit::Raw(ProfileText::from_profile(&edited)),
        ));

        // Act
        service.execute(&mut session).await.unwrap();

        // Assert
        let reloaded = ctx.content.current().await.view.profile.clone();
        assert_eq!(reloaded, edited);
        assert_eq!(
            ProfileText::from_profile(&reloaded).parse().unwrap(),
            edited
        );
    }

    #[tokio::test]
    async fn backend_failure_uses_backend_text() {
        // Arrange
        let store = InMemoryContentStore::new();
        store.fail_writes_with("new row violates row-level security policy");
        let ctx = store.editing_context();
        let service = SaveProfileService::new(store.clone(), ctx.clone());
        let base = ctx.content.defaults().profile.clone();
        let mut session = EditSession::open_existing(ProfileDraft::new(
            base.clone(),
            ProfileEdit::Main(MainInfoForm::from_profile(&base)),
        ));

        // Act
        let result = service.execute(&mut session).await;

        // Assert
        assert!(matches!(result, Err(SaveError::Remote(_))));
        let notice = ctx.notices.active().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "new row violates row-level security policy");
    }
}
