pub mod content_writer;

pub use content_writer::{ContentWriter, ContentWriterError};
