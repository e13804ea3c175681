mod get_session;
mod login;
mod logout;

pub use get_session::get_session_handler;
pub use login::{login_handler, LoginRequestDto};
pub use logout::{logout_handler, SignedOut};

pub use get_session::__path_get_session_handler;
pub use login::__path_login_handler;
pub use logout::__path_logout_handler;
