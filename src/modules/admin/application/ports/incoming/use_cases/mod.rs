mod delete_content;
mod save_content;
mod seed_content;

pub use delete_content::{
    DeleteBlogPostUseCase, DeleteError, DeleteOutcome, DeleteProjectUseCase,
};
pub use save_content::{
    SaveBlogPostUseCase, SaveError, SaveProfileUseCase, SaveProjectUseCase, Saved,
};
pub use seed_content::{SeedContentUseCase, SeedError, SeedOutcome};
