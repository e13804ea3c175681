use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

/// The single site-owner record. Its camelCase JSON form is also what the
/// raw profile editor reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_learning: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct About {
    #[serde(default)]
    pub summary: String,
    /// Paragraphs, in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub name: String,
    /// Icon reference resolved by the front-end (e.g. `Code2`).
    pub icon: String,
    pub category: SkillCategory,
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<String>,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Blog post
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    /// Display date such as `Oct 12, 2023`.
    pub date: String,
    pub read_time: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Display format used for blog dates.
pub const BLOG_DATE_FORMAT: &str = "%b %d, %Y";

impl BlogPost {
    /// Calendar date behind the display string, when it can be read.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, BLOG_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

/// Orders posts newest first by their parsed date. Posts whose date cannot be
/// parsed keep their relative order after all dated posts.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| match (a.published_on(), b.published_on()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(id: i64, date: &str) -> BlogPost {
        BlogPost {
            id,
            title: format!("Post {id}"),
            excerpt: "x".to_string(),
            date: date.to_string(),
            read_time: "1 min read".to_string(),
            slug: format!("post-{id}"),
            link: None,
        }
    }

    #[test]
    fn project_lists_default_to_empty_when_null_or_missing() {
        let project: Project = serde_json::from_value(json!({
            "id": 9,
            "title": "T",
            "description": "D",
            "image": "https://x/y.png",
            "tags": null
        }))
        .unwrap();

        assert!(project.tags.is_empty());
        assert!(project.features.is_empty());
        assert!(project.gallery.is_empty());
        assert_eq!(project.demo_url, "");
    }

    #[test]
    fn profile_uses_camel_case_keys() {
        let profile = Profile {
            name: "Ada".to_string(),
            currently_learning: Some(vec!["Rust".to_string()]),
            ..Profile::default()
        };

        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["currentlyLearning"], json!(["Rust"]));
        assert!(value.get("location").is_none());
        assert!(value.get("skills").is_none());
    }

    #[test]
    fn skill_category_is_lowercase() {
        let skill: Skill = serde_json::from_value(json!({
            "name": "Docker",
            "icon": "Cpu",
            "category": "tools"
        }))
        .unwrap();

        assert_eq!(skill.category, SkillCategory::Tools);
    }

    #[test]
    fn published_on_reads_display_and_iso_dates() {
        assert_eq!(
            post(1, "Oct 12, 2023").published_on(),
            NaiveDate::from_ymd_opt(2023, 10, 12)
        );
        assert_eq!(
            post(1, "2024-01-05").published_on(),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(post(1, "someday").published_on(), None);
    }

    #[test]
    fn sort_newest_first_is_chronological_across_years() {
        // Lexically "Nov" > "Jan" would put the 2023 post first.
        let mut posts = vec![
            post(1, "Nov 03, 2023"),
            post(2, "Jan 10, 2024"),
            post(3, "draft"),
            post(4, "Dec 15, 2023"),
            post(5, "tbd"),
        ];

        sort_newest_first(&mut posts);

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);
    }
}
