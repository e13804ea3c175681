use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use super::sea_orm_entity::messages;
use crate::inbox::application::domain::{ContactMessage, NewContactMessage};
use crate::inbox::application::ports::outgoing::{MessageStore, MessageStoreError};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct MessageStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageStore for MessageStorePostgres {
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, MessageStoreError> {
        let model = messages::ActiveModel {
            id: NotSet,
            created_at: Set(Utc::now().fixed_offset()),
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            is_read: Set(false),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(saved.into())
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, MessageStoreError> {
        let rows = messages::Entity::find()
            .order_by_desc(messages::Column::CreatedAt)
            .order_by_desc(messages::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<ContactMessage>, MessageStoreError> {
        let row = messages::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(ContactMessage::from))
    }

    async fn mark_read(&self, id: i64) -> Result<(), MessageStoreError> {
        let result = messages::Entity::update_many()
            .col_expr(messages::Column::IsRead, true.into())
            .filter(messages::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageStoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), MessageStoreError> {
        let result = messages::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageStoreError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> MessageStoreError {
    MessageStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
