//! Profile, skill and education domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Upper bound of a skill level, also the track length of a skill bar.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// The portfolio owner's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    /// Multi-line biography
    pub bio: String,
    /// Formatted display phone, e.g. `+55 (17) 98821-1306`
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Shallow-merge update for the [`Profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<Option<String>>,
}

impl ProfilePatch {
    /// Builds a patch that sets a single text field.
    ///
    /// An empty LinkedIn value clears the optional field.
    pub fn field(field: ProfileField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut patch = Self::default();
        match field {
            ProfileField::Name => patch.name = Some(value),
            ProfileField::Role => patch.role = Some(value),
            ProfileField::Bio => patch.bio = Some(value),
            ProfileField::Phone => patch.phone = Some(value),
            ProfileField::Email => patch.email = Some(value),
            ProfileField::Linkedin => {
                patch.linkedin = Some((!value.is_empty()).then_some(value));
            }
        }
        patch
    }

    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(phone) = self.phone {
            profile.phone = phone;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(linkedin) = self.linkedin {
            profile.linkedin = linkedin;
        }
    }
}

/// Names of the editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProfileField {
    Name,
    Role,
    Bio,
    Phone,
    Email,
    Linkedin,
}

/// A skill shown on the home page as a level bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// 0-100
    pub level: u8,
    pub is_visible: bool,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: clamp_level(level),
            is_visible: true,
        }
    }
}

/// Clamps an arbitrary integer into the 0-100 skill range.
pub fn clamp_level(level: i64) -> u8 {
    level.clamp(0, i64::from(MAX_SKILL_LEVEL)) as u8
}

/// An education entry of the résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    /// Free text such as `2016 - 2020`
    pub year: String,
    pub is_visible: bool,
}

impl Education {
    pub fn new(
        id: impl Into<String>,
        institution: impl Into<String>,
        degree: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            institution: institution.into(),
            degree: degree.into(),
            year: year.into(),
            is_visible: true,
        }
    }
}
