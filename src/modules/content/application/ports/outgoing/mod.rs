pub mod content_query;

pub use content_query::{ContentQuery, ContentQueryError};
