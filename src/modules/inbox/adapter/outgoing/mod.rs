pub mod message_store_postgres;
pub mod sea_orm_entity;
pub mod unconfigured;

pub use message_store_postgres::MessageStorePostgres;
