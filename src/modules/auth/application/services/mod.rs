mod bootstrap_admin_service;
mod get_session_service;
mod login_service;
mod logout_service;
pub mod token_hasher;

pub use bootstrap_admin_service::BootstrapAdminService;
pub use get_session_service::GetSessionService;
pub use login_service::LoginService;
pub use logout_service::LogoutService;
