pub mod confirmation;
pub mod drafts;
pub mod edit_session;
pub mod list_field;
pub mod notice;
pub mod profile_forms;

pub use confirmation::{ConfirmQuery, Confirmation};
pub use drafts::{
    BlogPostDraft, BlogPostRecord, Draft, FieldError, FieldProblem, ListInput, ProjectDraft,
    ProjectRecord, ValidationError,
};
pub use edit_session::{BeginSaveError, EditSession, SessionError, SessionState};
pub use notice::{Notice, NoticeKind};
pub use profile_forms::{
    ContactInfoForm, MainInfoForm, ProfileDraft, ProfileEdit, ProfileText, SkillsBuilder,
};
