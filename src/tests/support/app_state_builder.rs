use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::admin::application::ports::incoming::use_cases::{
    DeleteBlogPostUseCase, DeleteProjectUseCase, SaveBlogPostUseCase, SaveProfileUseCase,
    SaveProjectUseCase, SeedContentUseCase,
};
use crate::admin::application::services::NotificationCenter;
use crate::admin::application::AdminUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GetSessionUseCase, LoginUseCase, LogoutUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::content::application::domain::defaults::DefaultContentBundle;
use crate::content::application::services::ContentRepository;
use crate::inbox::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, ListMessagesUseCase, OpenMessageUseCase, SubmitMessageUseCase,
};
use crate::inbox::application::InboxUseCases;
use crate::shared::backend::UnconfiguredBackend;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub unless a test swaps
/// in the one it exercises. Content defaults to the built-in bundle.
pub struct TestAppStateBuilder {
    content: Arc<ContentRepository>,
    notices: Arc<NotificationCenter>,

    save_project: Option<Arc<dyn SaveProjectUseCase + Send + Sync>>,
    delete_project: Option<Arc<dyn DeleteProjectUseCase + Send + Sync>>,
    save_blog_post: Option<Arc<dyn SaveBlogPostUseCase + Send + Sync>>,
    delete_blog_post: Option<Arc<dyn DeleteBlogPostUseCase + Send + Sync>>,
    save_profile: Option<Arc<dyn SaveProfileUseCase + Send + Sync>>,
    seed: Option<Arc<dyn SeedContentUseCase + Send + Sync>>,

    submit_message: Option<Arc<dyn SubmitMessageUseCase + Send + Sync>>,
    list_messages: Option<Arc<dyn ListMessagesUseCase + Send + Sync>>,
    open_message: Option<Arc<dyn OpenMessageUseCase + Send + Sync>>,
    delete_message: Option<Arc<dyn DeleteMessageUseCase + Send + Sync>>,

    login: Option<Arc<dyn LoginUseCase + Send + Sync>>,
    session: Option<Arc<dyn GetSessionUseCase + Send + Sync>>,
    logout: Option<Arc<dyn LogoutUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: Arc::new(ContentRepository::new(
                Arc::new(UnconfiguredBackend),
                DefaultContentBundle::builtin(),
                Duration::from_secs(1),
            )),
            notices: Arc::new(NotificationCenter::default()),
            save_project: Some(Arc::new(StubSaveProjectUseCase)),
            delete_project: Some(Arc::new(StubDeleteProjectUseCase)),
            save_blog_post: Some(Arc::new(StubSaveBlogPostUseCase)),
            delete_blog_post: Some(Arc::new(StubDeleteBlogPostUseCase)),
            save_profile: Some(Arc::new(StubSaveProfileUseCase)),
            seed: Some(Arc::new(StubSeedContentUseCase)),
            submit_message: Some(Arc::new(StubSubmitMessageUseCase)),
            list_messages: Some(Arc::new(StubListMessagesUseCase)),
            open_message: Some(Arc::new(StubOpenMessageUseCase)),
            delete_message: Some(Arc::new(StubDeleteMessageUseCase)),
            login: Some(Arc::new(StubLoginUseCase)),
            session: Some(Arc::new(StubGetSessionUseCase)),
            logout: Some(Arc::new(StubLogoutUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: Arc<ContentRepository>) -> Self {
        self.content = content;
        self
    }

    pub fn with_notices(mut self, notices: Arc<NotificationCenter>) -> Self {
        self.notices = notices;
        self
    }

    // ──── Admin ────

    pub fn with_save_project(mut self, uc: impl SaveProjectUseCase + Send + Sync + 'static) -> Self {
        self.save_project = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_project = Some(Arc::new(uc));
        self
    }

    pub fn with_save_blog_post(
        mut self,
        uc: impl SaveBlogPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_blog_post = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_blog_post(
        mut self,
        uc: impl DeleteBlogPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_blog_post = Some(Arc::new(uc));
        self
    }

    pub fn with_save_profile(mut self, uc: impl SaveProfileUseCase + Send + Sync + 'static) -> Self {
        self.save_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_seed(mut self, uc: impl SeedContentUseCase + Send + Sync + 'static) -> Self {
        self.seed = Some(Arc::new(uc));
        self
    }

    // ──── Inbox ────

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_message = Some(Arc::new(uc));
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_messages = Some(Arc::new(uc));
        self
    }

    pub fn with_open_message(mut self, uc: impl OpenMessageUseCase + Send + Sync + 'static) -> Self {
        self.open_message = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_message(
        mut self,
        uc: impl DeleteMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_message = Some(Arc::new(uc));
        self
    }

    // ──── Auth ────

    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_session(mut self, uc: impl GetSessionUseCase + Send + Sync + 'static) -> Self {
        self.session = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
            notices: self.notices,
            admin: AdminUseCases {
                save_project: self.save_project.expect("save_project not set"),
                delete_project: self.delete_project.expect("delete_project not set"),
                save_blog_post: self.save_blog_post.expect("save_blog_post not set"),
                delete_blog_post: self.delete_blog_post.expect("delete_blog_post not set"),
                save_profile: self.save_profile.expect("save_profile not set"),
                seed: self.seed.expect("seed not set"),
            },
            inbox: InboxUseCases {
                submit: self.submit_message.expect("submit_message not set"),
                list: self.list_messages.expect("list_messages not set"),
                open: self.open_message.expect("open_message not set"),
                delete: self.delete_message.expect("delete_message not set"),
            },
            auth: AuthUseCases {
                login: self.login.expect("login not set"),
                session: self.session.expect("session not set"),
                logout: self.logout.expect("logout not set"),
            },
        })
    }
}
