pub mod content_writer_postgres;
pub mod unconfigured;

pub use content_writer_postgres::ContentWriterPostgres;
