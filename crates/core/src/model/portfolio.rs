use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Content shipped with the crate, used when no override file is given.
const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("profile name must not be empty")]
    EmptyName,
    #[error("skill {name:?} has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },
    #[error("skill group {0:?} lists no skills")]
    EmptySkillGroup(String),
    #[error("experience {0:?} lists no achievements")]
    NoAchievements(String),
}

/// Immutable page content: everything the sections display.
///
/// Loaded once at startup and only ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub languages: Vec<Language>,
    pub achievement: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
    pub reference: Option<Reference>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub full_name: String,
    /// Wordmark in the navigation bar.
    pub brand: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub cgpa: Option<String>,
    pub avatar: String,
    /// About-section paragraphs.
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub fluency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub qualification: String,
    pub period: String,
    pub result: String,
    /// Show the result with a star, as a headline grade.
    #[serde(default)]
    pub highlight_result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, in percent.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub pitch: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    /// Title and affiliation, one line each.
    pub position: Vec<String>,
    pub phone: String,
    pub email: String,
}

impl Portfolio {
    /// The content bundled with the crate.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT.as_bytes())
    }

    /// Parse and validate a content document.
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_slice(data)?;
        portfolio.validate()?;
        debug!(
            name = %portfolio.profile.name,
            experience = portfolio.experience.len(),
            skill_groups = portfolio.skills.len(),
            "loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Read a content document from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        for group in &self.skills {
            if group.skills.is_empty() {
                return Err(ContentError::EmptySkillGroup(group.title.clone()));
            }
            if let Some(skill) = group.skills.iter().find(|s| s.level > 100) {
                return Err(ContentError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        if let Some(exp) = self.experience.iter().find(|e| e.achievements.is_empty()) {
            return Err(ContentError::NoAchievements(exp.title.clone()));
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_value() -> serde_json::Value {
        serde_json::from_str(BUILTIN_CONTENT).unwrap()
    }

    #[test]
    fn builtin_content_is_valid() {
        let p = Portfolio::builtin().unwrap();
        assert_eq!(p.profile.name, "Megat Syakir Raif");
        assert_eq!(p.education.len(), 2);
        assert_eq!(p.experience.len(), 4);
        assert_eq!(p.skills.len(), 2);
        assert!(p.skills.iter().all(|g| g.skills.len() == 3));
        assert_eq!(p.mailto(), "mailto:megatsyakir.raif@gmail.com");
    }

    #[test]
    fn rejects_skill_over_100() {
        let mut v = builtin_value();
        v["skills"][0]["skills"][1]["level"] = 120.into();
        let err = Portfolio::from_json(v.to_string().as_bytes()).unwrap_err();
        assert!(
            matches!(err, ContentError::SkillLevelOutOfRange { ref name, level: 120 } if name == "Java"),
            "got {err:?}"
        );
    }

    #[test]
    fn rejects_empty_name() {
        let mut v = builtin_value();
        v["profile"]["name"] = "  ".into();
        let err = Portfolio::from_json(v.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyName));
    }

    #[test]
    fn rejects_experience_without_achievements() {
        let mut v = builtin_value();
        v["experience"][2]["achievements"] = serde_json::json!([]);
        let err = Portfolio::from_json(v.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::NoAchievements(ref t) if t == "Vice Treasurer"));
    }

    #[test]
    fn rejects_empty_skill_group() {
        let mut v = builtin_value();
        v["skills"][1]["skills"] = serde_json::json!([]);
        let err = Portfolio::from_json(v.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::EmptySkillGroup(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Portfolio::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Portfolio::load(Path::new("/nonexistent/folio/content.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
