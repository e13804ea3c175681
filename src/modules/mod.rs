pub mod admin;
pub mod auth;
pub mod content;
pub mod inbox;
