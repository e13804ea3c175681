use std::{fmt, sync::OnceLock};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::list_field::{ListField, FEATURES, GALLERY, TAGS};
use crate::content::application::domain::entities::{BlogPost, Project};

//
// ──────────────────────────────────────────────────────────
// Validation errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::Invalid(message) => f.write_str(message),
        }
    }
}

/// Every problem found in a draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn join_messages(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: &'static str, problem: FieldProblem) -> Self {
        Self {
            fields: vec![FieldError { field, problem }],
        }
    }

    /// Structured text that could not be parsed at all.
    pub fn invalid_format() -> Self {
        Self::single("text", FieldProblem::Invalid("Invalid JSON format".to_string()))
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

/// Collects field problems while a draft is checked.
#[derive(Default)]
pub(crate) struct Checker {
    fields: Vec<FieldError>,
}

impl Checker {
    pub(crate) fn required(&mut self, field: &'static str, value: &Option<String>) -> String {
        match trimmed(value) {
            Some(v) => v,
            None => {
                self.missing(field);
                String::new()
            }
        }
    }

    pub(crate) fn missing(&mut self, field: &'static str) {
        self.fields.push(FieldError {
            field,
            problem: FieldProblem::Missing,
        });
    }

    pub(crate) fn invalid(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            problem: FieldProblem::Invalid(message.into()),
        });
    }

    pub(crate) fn finish<T>(self, record: T) -> Result<T, ValidationError> {
        if self.fields.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError {
                fields: self.fields,
            })
        }
    }
}

pub(crate) fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// An in-progress edit buffer that can be checked into a save-ready record.
pub trait Draft: Clone + Send + Sync {
    type Record: Clone + Send + Sync;

    fn validate(&self) -> Result<Self::Record, ValidationError>;
}

//
// ──────────────────────────────────────────────────────────
// List input
// ──────────────────────────────────────────────────────────
//

/// A list field as submitted: either already a list, or form text in the
/// field's delimiter convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ListInput {
    Items(Vec<String>),
    Text(String),
}

impl ListInput {
    pub fn resolve(&self, field: &ListField) -> Vec<String> {
        match self {
            ListInput::Items(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            ListInput::Text(text) => field.split(text),
        }
    }
}

fn resolve_list(input: &Option<ListInput>, field: &ListField) -> Vec<String> {
    input
        .as_ref()
        .map(|i| i.resolve(field))
        .unwrap_or_default()
}

/// Ids of zero or below are what a blank form sends; they mean "create".
fn existing_id(id: Option<i64>) -> Option<i64> {
    id.filter(|id| *id > 0)
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<ListInput>,
    pub tags: Option<ListInput>,
    pub features: Option<ListInput>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub case_study_url: Option<String>,
}

/// Upsert payload. `id` is absent for a create, so the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub image: String,
    pub gallery: Vec<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub demo_url: String,
    pub github_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_url: Option<String>,
}

/// Placeholder link used when a project has no demo or repository.
const NO_LINK: &str = "#";

impl ProjectDraft {
    /// Whether saving this draft overwrites a stored row.
    pub fn targets_existing(&self) -> bool {
        existing_id(self.id).is_some()
    }
}

impl Draft for ProjectDraft {
    type Record = ProjectRecord;

    fn validate(&self) -> Result<ProjectRecord, ValidationError> {
        let mut check = Checker::default();

        let title = check.required("title", &self.title);
        let description = check.required("description", &self.description);
        let image = check.required("image", &self.image);

        check.finish(ProjectRecord {
            id: existing_id(self.id),
            title,
            description,
            long_description: trimmed(&self.long_description),
            image,
            gallery: resolve_list(&self.gallery, &GALLERY),
            tags: resolve_list(&self.tags, &TAGS),
            features: resolve_list(&self.features, &FEATURES),
            demo_url: trimmed(&self.demo_url).unwrap_or_else(|| NO_LINK.to_string()),
            github_url: trimmed(&self.github_url).unwrap_or_else(|| NO_LINK.to_string()),
            case_study_url: trimmed(&self.case_study_url),
        })
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            title: Some(project.title.clone()),
            description: Some(project.description.clone()),
            long_description: project.long_description.clone(),
            image: Some(project.image.clone()),
            gallery: Some(ListInput::Items(project.gallery.clone())),
            tags: Some(ListInput::Items(project.tags.clone())),
            features: Some(ListInput::Items(project.features.clone())),
            demo_url: Some(project.demo_url.clone()),
            github_url: Some(project.github_url.clone()),
            case_study_url: project.case_study_url.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog post
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDraft {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub slug: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn is_url_safe_slug(slug: &str) -> bool {
    static SLUG: OnceLock<Option<Regex>> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(slug))
}

impl BlogPostDraft {
    /// A blank post dated `today`, e.g. `Oct 5, 2023`.
    pub fn new_for_today(today: NaiveDate) -> Self {
        Self {
            date: Some(today.format("%b %-d, %Y").to_string()),
            ..Self::default()
        }
    }

    pub fn targets_existing(&self) -> bool {
        existing_id(self.id).is_some()
    }
}

impl Draft for BlogPostDraft {
    type Record = BlogPostRecord;

    fn validate(&self) -> Result<BlogPostRecord, ValidationError> {
        let mut check = Checker::default();

        let title = check.required("title", &self.title);
        let excerpt = check.required("excerpt", &self.excerpt);
        let date = check.required("date", &self.date);
        let read_time = check.required("readTime", &self.read_time);
        let slug = check.required("slug", &self.slug);

        if !slug.is_empty() && !is_url_safe_slug(&slug) {
            check.invalid(
                "slug",
                "slug may only contain lowercase letters, digits and single hyphens",
            );
        }

        check.finish(BlogPostRecord {
            id: existing_id(self.id),
            title,
            excerpt,
            date,
            read_time,
            slug,
            link: trimmed(&self.link),
        })
    }
}

impl From<&BlogPost> for BlogPostDraft {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: Some(post.id),
            title: Some(post.title.clone()),
            excerpt: Some(post.excerpt.clone()),
            date: Some(post.date.clone()),
            read_time: Some(post.read_time.clone()),
            slug: Some(post.slug.clone()),
            link: post.link.clone(),
        }
    }
}
