// ABOUTME: Career profile data model shared with the profile store
// Every top-level field is optional on the wire; absent sequences decode to empty

use serde::{Deserialize, Deserializer, Serialize};

/// A user's career profile as produced by the extraction backend.
///
/// The profile is an immutable snapshot once loaded. Updating it means discarding the
/// snapshot and waiting for a replacement to be written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(deserialize_with = "null_as_empty")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_empty")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub technologies: Vec<String>,
}

impl Profile {
    /// Decode a profile from the JSON text returned by the store
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode in the same camelCase layout the store persists
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// About-me text, treating an empty string as absent
    pub fn about_me(&self) -> Option<&str> {
        non_empty(self.about_me.as_deref())
    }
}

impl PersonalInfo {
    /// Labelled fields that carry a non-empty value, in display order
    pub fn present_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Name", self.name.as_deref()),
            ("Email", self.email.as_deref()),
            ("Phone", self.phone.as_deref()),
            ("Location", self.location.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| non_empty(value).map(|v| (label, v)))
        .collect()
    }
}

impl Education {
    pub fn year(&self) -> Option<&str> {
        non_empty(self.year.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Sequences may be sent as `null`; treat that like an absent field
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
