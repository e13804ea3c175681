use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::drafts::{trimmed, Checker, Draft, ValidationError};
use super::list_field::{ABOUT_PARAGRAPHS, CURRENTLY_LEARNING};
use crate::content::application::domain::entities::{Profile, Skill};

//
// ──────────────────────────────────────────────────────────
// Section forms
// ──────────────────────────────────────────────────────────
//

/// Name, headline and about text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MainInfoForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    /// About paragraphs separated by a blank line.
    #[serde(default)]
    pub description: String,
    /// Comma separated. Left untouched when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_learning: Option<String>,
}

impl MainInfoForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            role: profile.role.clone(),
            title: profile.title.clone(),
            location: profile.location.clone().unwrap_or_default(),
            summary: profile.about.summary.clone(),
            description: ABOUT_PARAGRAPHS.join(&profile.about.description),
            currently_learning: profile
                .currently_learning
                .as_ref()
                .map(|items| CURRENTLY_LEARNING.join(items)),
        }
    }

    fn merge_into(&self, mut profile: Profile) -> Profile {
        profile.name = self.name.trim().to_string();
        profile.role = self.role.trim().to_string();
        profile.title = self.title.trim().to_string();
        profile.location = trimmed(&Some(self.location.clone()));
        profile.about.summary = self.summary.trim().to_string();
        profile.about.description = ABOUT_PARAGRAPHS.split(&self.description);
        if let Some(text) = &self.currently_learning {
            profile.currently_learning = Some(CURRENTLY_LEARNING.split(text));
        }
        profile
    }
}

/// Email and social links. Blank links are removed from the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactInfoForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

impl ContactInfoForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            email: profile.email.clone(),
            github: profile.social.github.clone().unwrap_or_default(),
            linkedin: profile.social.linkedin.clone().unwrap_or_default(),
            twitter: profile.social.twitter.clone().unwrap_or_default(),
        }
    }

    fn merge_into(&self, mut profile: Profile) -> Profile {
        profile.email = self.email.trim().to_string();
        profile.social.github = trimmed(&Some(self.github.clone()));
        profile.social.linkedin = trimmed(&Some(self.linkedin.clone()));
        profile.social.twitter = trimmed(&Some(self.twitter.clone()));
        profile
    }
}

/// Ordered skills list edited in memory and saved as one profile write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsBuilder {
    skills: Vec<Skill>,
}

impl SkillsBuilder {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            skills: profile.skills.clone().unwrap_or_default(),
        }
    }

    pub fn add(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    /// Removes the skill at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Skill> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

impl From<Vec<Skill>> for SkillsBuilder {
    fn from(skills: Vec<Skill>) -> Self {
        Self { skills }
    }
}

//
// ──────────────────────────────────────────────────────────
// Raw text
// ──────────────────────────────────────────────────────────
//

/// The whole profile as pretty-printed JSON, the raw editor's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileText(pub String);

impl ProfileText {
    pub fn from_profile(profile: &Profile) -> Self {
        // A Profile always serializes; the fallback only guards the signature.
        Self(serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string()))
    }

    pub fn parse(&self) -> Result<Profile, ValidationError> {
        serde_json::from_str(&self.0).map_err(|_| ValidationError::invalid_format())
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile draft
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEdit {
    Main(MainInfoForm),
    Contact(ContactInfoForm),
    Skills(SkillsBuilder),
    Raw(ProfileText),
}

impl ProfileEdit {
    pub fn saved_message(&self) -> &'static str {
        match self {
            ProfileEdit::Main(_) => "Main section updated successfully!",
            ProfileEdit::Contact(_) => "Contact info updated successfully!",
            ProfileEdit::Skills(_) => "Skills updated successfully!",
            ProfileEdit::Raw(_) => "Profile updated successfully!",
        }
    }

    pub fn failed_message(&self) -> &'static str {
        match self {
            ProfileEdit::Main(_) => "Error updating main section",
            ProfileEdit::Contact(_) => "Error updating contact info",
            ProfileEdit::Skills(_) => "Error updating skills",
            ProfileEdit::Raw(_) => "Error updating profile",
        }
    }
}

/// One section edit layered over the profile it was opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub base: Profile,
    pub edit: ProfileEdit,
}

impl ProfileDraft {
    pub fn new(base: Profile, edit: ProfileEdit) -> Self {
        Self { base, edit }
    }
}

impl Draft for ProfileDraft {
    type Record = Profile;

    fn validate(&self) -> Result<Profile, ValidationError> {
        let merged = match &self.edit {
            ProfileEdit::Main(form) => form.merge_into(self.base.clone()),
            ProfileEdit::Contact(form) => form.merge_into(self.base.clone()),
            ProfileEdit::Skills(builder) => Profile {
                skills: Some(builder.skills().to_vec()),
                ..self.base.clone()
            },
            ProfileEdit::Raw(text) => text.parse()?,
        };

        let mut check = Checker::default();
        if merged.name.trim().is_empty() {
            check.missing("name");
        }
        if merged.email.trim().is_empty() {
            check.missing("email");
        }
        check.finish(merged)
    }
}
