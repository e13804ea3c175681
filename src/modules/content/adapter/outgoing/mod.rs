pub mod content_query_postgres;
pub mod sea_orm_entity;
pub mod unconfigured;

pub use content_query_postgres::ContentQueryPostgres;
