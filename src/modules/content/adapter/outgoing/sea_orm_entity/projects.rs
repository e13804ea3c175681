use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub long_description: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    // JSON arrays of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub gallery: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    #[sea_orm(column_type = "Text")]
    pub demo_url: String,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub case_study_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_project(&self) -> Result<Project, String> {
        Ok(Project {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            long_description: self.long_description.clone(),
            image: self.image.clone(),
            gallery: string_list(&self.gallery, "gallery")?,
            tags: string_list(&self.tags, "tags")?,
            features: string_list(&self.features, "features")?,
            demo_url: self.demo_url.clone(),
            github_url: self.github_url.clone(),
            case_study_url: self.case_study_url.clone(),
        })
    }
}

/// Reads a JSON array of strings. SQL NULL or JSON null count as empty.
pub fn string_list(json: &Json, column: &str) -> Result<Vec<String>, String> {
    if json.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(json.clone()).map_err(|e| format!("{column}: {e}"))
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
