use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::content::application::{
    domain::entities::{BlogPost, Profile, Project},
    ports::outgoing::{ContentQuery, ContentQueryError},
};

use super::sea_orm_entity::{
    blogs,
    profile::{self, PROFILE_ROW_ID},
    projects,
};

#[derive(Debug, Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        let row = profile::Entity::find_by_id(PROFILE_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            None => Ok(None),
            Some(model) if model.data.is_null() => Ok(None),
            Some(model) => serde_json::from_value(model.data)
                .map(Some)
                .map_err(|e| ContentQueryError::Malformed {
                    entity: "profile",
                    message: e.to_string(),
                }),
        }
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        let rows = projects::Entity::find()
            .order_by_asc(projects::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|model| {
                model
                    .to_project()
                    .map_err(|message| ContentQueryError::Malformed {
                        entity: "project",
                        message,
                    })
            })
            .collect()
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError> {
        let rows = blogs::Entity::find()
            .order_by_desc(blogs::Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(e.to_string())
}
