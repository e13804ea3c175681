use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, NotSet, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::info;

use crate::admin::application::domain::{BlogPostRecord, ProjectRecord};
use crate::admin::application::ports::outgoing::{ContentWriter, ContentWriterError};
use crate::content::adapter::outgoing::sea_orm_entity::{
    blogs,
    profile::{self, PROFILE_ROW_ID},
    projects,
};
use crate::content::application::domain::entities::{BlogPost, Profile, Project};

// ============================================================================
// Writer Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContentWriterPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentWriterPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentWriter for ContentWriterPostgres {
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), ContentWriterError> {
        let model = profile::ActiveModel {
            id: Set(PROFILE_ROW_ID),
            data: Set(to_json(profile)?),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        profile::Entity::insert(model)
            .on_conflict(
                OnConflict::column(profile::Column::Id)
                    .update_columns([profile::Column::Data, profile::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn upsert_project(&self, record: ProjectRecord) -> Result<Project, ContentWriterError> {
        let now = Utc::now().fixed_offset();
        let id = record.id;

        let mut model = projects::ActiveModel {
            id: NotSet,
            title: Set(record.title),
            description: Set(record.description),
            long_description: Set(record.long_description),
            image: Set(record.image),
            gallery: Set(to_json(&record.gallery)?),
            tags: Set(to_json(&record.tags)?),
            features: Set(to_json(&record.features)?),
            demo_url: Set(record.demo_url),
            github_url: Set(record.github_url),
            case_study_url: Set(record.case_study_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = match id {
            None => model.insert(&*self.db).await.map_err(map_db_err)?,
            Some(id) => {
                model.id = Set(id);
                model.created_at = NotSet;
                model.update(&*self.db).await.map_err(map_update_err)?
            }
        };

        saved.to_project().map_err(ContentWriterError::Serialization)
    }

    async fn delete_project(&self, id: i64) -> Result<(), ContentWriterError> {
        let result = projects::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContentWriterError::NotFound);
        }

        Ok(())
    }

    async fn upsert_blog_post(
        &self,
        record: BlogPostRecord,
    ) -> Result<BlogPost, ContentWriterError> {
        let now = Utc::now().fixed_offset();
        let id = record.id;

        let mut model = blogs::ActiveModel {
            id: NotSet,
            title: Set(record.title),
            excerpt: Set(record.excerpt),
            date: Set(record.date),
            read_time: Set(record.read_time),
            slug: Set(record.slug),
            link: Set(record.link),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = match id {
            None => model.insert(&*self.db).await.map_err(map_db_err)?,
            Some(id) => {
                model.id = Set(id);
                model.created_at = NotSet;
                model.update(&*self.db).await.map_err(map_update_err)?
            }
        };

        Ok(BlogPost::from(saved))
    }

    async fn delete_blog_post(&self, id: i64) -> Result<(), ContentWriterError> {
        let result = blogs::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContentWriterError::NotFound);
        }

        Ok(())
    }

    async fn replace_content(
        &self,
        project_list: &[Project],
        blog_posts: &[BlogPost],
    ) -> Result<(), ContentWriterError> {
        let now = Utc::now().fixed_offset();

        let project_models = project_list
            .iter()
            .map(|p| {
                Ok(projects::ActiveModel {
                    id: Set(p.id),
                    title: Set(p.title.clone()),
                    description: Set(p.description.clone()),
                    long_description: Set(p.long_description.clone()),
                    image: Set(p.image.clone()),
                    gallery: Set(to_json(&p.gallery)?),
                    tags: Set(to_json(&p.tags)?),
                    features: Set(to_json(&p.features)?),
                    demo_url: Set(p.demo_url.clone()),
                    github_url: Set(p.github_url.clone()),
                    case_study_url: Set(p.case_study_url.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                })
            })
            .collect::<Result<Vec<_>, ContentWriterError>>()?;

        let blog_models: Vec<blogs::ActiveModel> = blog_posts
            .iter()
            .map(|b| blogs::ActiveModel {
                id: Set(b.id),
                title: Set(b.title.clone()),
                excerpt: Set(b.excerpt.clone()),
                date: Set(b.date.clone()),
                read_time: Set(b.read_time.clone()),
                slug: Set(b.slug.clone()),
                link: Set(b.link.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .collect();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        projects::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if !project_models.is_empty() {
            projects::Entity::insert_many(project_models)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        blogs::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if !blog_models.is_empty() {
            blogs::Entity::insert_many(blog_models)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        // Explicit ids leave the serial sequences behind.
        for table in ["projects", "blogs"] {
            txn.execute(Statement::from_string(
                txn.get_database_backend(),
                format!(
                    "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                     COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
                ),
            ))
            .await
            .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        info!(
            projects = project_list.len(),
            blog_posts = blog_posts.len(),
            "Replaced stored content"
        );

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_json<T: serde::Serialize + ?Sized>(
    data: &T,
) -> Result<serde_json::Value, ContentWriterError> {
    serde_json::to_value(data).map_err(|e| ContentWriterError::Serialization(e.to_string()))
}

fn map_db_err(e: DbErr) -> ContentWriterError {
    ContentWriterError::DatabaseError(e.to_string())
}

/// Updates never insert: an id with no stored row is reported, not created.
fn map_update_err(e: DbErr) -> ContentWriterError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ContentWriterError::NotFound,
        other => map_db_err(other),
    }
}

// ============================================================================
// Tests
// ============================================================================
