use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    GetSessionUseCase, LoginUseCase, LogoutUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub session: Arc<dyn GetSessionUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
}
