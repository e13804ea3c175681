use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admin_users;
use crate::auth::application::domain::AdminAccount;
use crate::auth::application::ports::outgoing::{AdminAccounts, AdminAccountsError};

#[derive(Clone)]
pub struct AdminAccountsPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminAccountsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminAccounts for AdminAccountsPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, AdminAccountsError> {
        let row = admin_users::Entity::find()
            .filter(admin_users::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(AdminAccount::from))
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AdminAccountsError> {
        let model = admin_users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AdminAccountsError::AlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        Ok(saved.into())
    }
}

fn map_db_err(e: DbErr) -> AdminAccountsError {
    AdminAccountsError::DatabaseError(e.to_string())
}
