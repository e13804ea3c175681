pub mod entities;
pub mod login_request;

pub use entities::{AdminAccount, AdminIdentity, AdminSession, AdminSessionView};
pub use login_request::{LoginRequest, LoginRequestError};
