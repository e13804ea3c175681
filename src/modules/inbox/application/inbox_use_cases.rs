use std::sync::Arc;

use crate::inbox::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, ListMessagesUseCase, OpenMessageUseCase, SubmitMessageUseCase,
};

#[derive(Clone)]
pub struct InboxUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub open: Arc<dyn OpenMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}
