pub mod blogs;
pub mod profile;
pub mod projects;
