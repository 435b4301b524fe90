//! Profile data types loaded from `portfolio-data.json`.
//!
//! The document is trusted: every field except `thesis` is required and a
//! missing one fails deserialization with serde's error message. Wire names
//! are camelCase, matching the JSON file.
//!
//! # Example
//!
//! ```rust
//! use portfolio_view::types::Profile;
//!
//! let json = r#"{
//!     "personal": {
//!         "name": "Ada Lovelace", "subtitle": "Analyst", "bio": "Notes on engines.",
//!         "email": "ada@example.org", "email2": "ada@work.example.org",
//!         "github": "https://github.com/ada", "linkedin": "https://linkedin.com/in/ada"
//!     },
//!     "education": [], "awards": [],
//!     "skills": { "Languages": ["Rust"] },
//!     "experience": [], "projects": []
//! }"#;
//!
//! let profile: Profile = serde_json::from_str(json).unwrap();
//! assert_eq!(profile.personal.name, "Ada Lovelace");
//! assert_eq!(profile.skills.categories()[0].name, "Languages");
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Root document describing the portfolio owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    pub education: Vec<Education>,
    pub awards: Vec<Award>,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

/// Identity and contact links shown in the hero, contact and footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub subtitle: String,
    pub bio: String,
    /// Primary address, also the target of every "send message" action
    pub email: String,
    pub email2: String,
    /// Full profile URL
    pub github: String,
    /// Full profile URL
    pub linkedin: String,
}

/// List key taken from the document.
///
/// The JSON uses numbers (`"id": 1`) but strings are accepted too; the value
/// is only ever used to key list entries, so its textual form is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => EntryId(n.to_string()),
            Raw::Text(s) => EntryId(s),
        })
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    /// Absent, `null` and `""` all mean "no thesis line"
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub thesis: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// One bullet per entry
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
}

/// One named group of the skills grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Skills grouped by category, in the order the document lists them.
///
/// Deserialized from a JSON object without going through a hash map, so
/// iteration follows key insertion order. A repeated key keeps its first
/// position and takes the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Skills(Vec<SkillCategory>);

impl Skills {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Skills(categories)
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.0
    }

    fn insert(&mut self, name: String, skills: Vec<String>) {
        match self.0.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.skills = skills,
            None => self.0.push(SkillCategory { name, skills }),
        }
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category names to lists of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Skills, A::Error> {
                let mut skills = Skills::default();
                while let Some((name, list)) = map.next_entry::<String, Vec<String>>()? {
                    skills.insert(name, list);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
