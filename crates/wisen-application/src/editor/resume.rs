//! Résumé tab of the admin panel.
//!
//! Every operation computes the next skills or education list from the
//! current one and hands it to the store wholesale.

use std::sync::Arc;

use wisen_core::IdGenerator;
use wisen_core::profile::{Education, ProfileField, ProfilePatch, ProfileStore, Skill, clamp_level};

use super::phone::format_phone;

const NEW_SKILL_LEVEL: i64 = 50;

pub struct ResumeEditor {
    ids: Arc<IdGenerator>,
}

impl ResumeEditor {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self { ids }
    }

    // ============================================================================
    // Profile
    // ============================================================================

    pub fn set_profile_field(
        &self,
        store: &mut ProfileStore,
        field: ProfileField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        let patch = match field {
            ProfileField::Phone => ProfilePatch::field(field, format_phone(&value)),
            _ => ProfilePatch::field(field, value),
        };
        store.update_profile(patch);
    }

    /// Stores the masked form of raw phone input.
    pub fn set_phone(&self, store: &mut ProfileStore, raw: &str) {
        self.set_profile_field(store, ProfileField::Phone, raw);
    }

    // ============================================================================
    // Skills
    // ============================================================================

    /// Appends a blank, visible skill at mid level and returns its id.
    pub fn add_skill(&self, store: &mut ProfileStore) -> String {
        let id = self.ids.next_id();
        let mut skills = store.skills().to_vec();
        skills.push(Skill::new(id.clone(), "", NEW_SKILL_LEVEL));
        store.update_skills(skills);
        tracing::debug!("[Resume] Added skill {}", id);
        id
    }

    pub fn set_skill_name(&self, store: &mut ProfileStore, id: &str, name: &str) -> bool {
        edit_skill(store, id, |s| s.name = name.to_string())
    }

    /// Sets the level, clamped into 0-100.
    pub fn set_skill_level(&self, store: &mut ProfileStore, id: &str, level: i64) -> bool {
        edit_skill(store, id, |s| s.level = clamp_level(level))
    }

    pub fn toggle_skill_visibility(&self, store: &mut ProfileStore, id: &str) -> bool {
        edit_skill(store, id, |s| s.is_visible = !s.is_visible)
    }

    pub fn delete_skill(&self, store: &mut ProfileStore, id: &str) -> bool {
        let before = store.skills().len();
        let skills: Vec<Skill> = store
            .skills()
            .iter()
            .filter(|s| s.id != id)
            .cloned()
            .collect();
        let removed = skills.len() != before;
        store.update_skills(skills);
        removed
    }

    // ============================================================================
    // Education
    // ============================================================================

    /// Appends a blank, visible education entry and returns its id.
    pub fn add_education(&self, store: &mut ProfileStore) -> String {
        let id = self.ids.next_id();
        let mut education = store.education().to_vec();
        education.push(Education::new(id.clone(), "", "", ""));
        store.update_education(education);
        tracing::debug!("[Resume] Added education {}", id);
        id
    }

    pub fn set_education_institution(
        &self,
        store: &mut ProfileStore,
        id: &str,
        institution: &str,
    ) -> bool {
        edit_education(store, id, |e| e.institution = institution.to_string())
    }

    pub fn set_education_degree(&self, store: &mut ProfileStore, id: &str, degree: &str) -> bool {
        edit_education(store, id, |e| e.degree = degree.to_string())
    }

    pub fn set_education_year(&self, store: &mut ProfileStore, id: &str, year: &str) -> bool {
        edit_education(store, id, |e| e.year = year.to_string())
    }

    pub fn toggle_education_visibility(&self, store: &mut ProfileStore, id: &str) -> bool {
        edit_education(store, id, |e| e.is_visible = !e.is_visible)
    }

    pub fn delete_education(&self, store: &mut ProfileStore, id: &str) -> bool {
        let before = store.education().len();
        let education: Vec<Education> = store
            .education()
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        let removed = education.len() != before;
        store.update_education(education);
        removed
    }
}

fn edit_skill(store: &mut ProfileStore, id: &str, edit: impl FnOnce(&mut Skill)) -> bool {
    let mut skills = store.skills().to_vec();
    let Some(skill) = skills.iter_mut().find(|s| s.id == id) else {
        return false;
    };
    edit(skill);
    store.update_skills(skills);
    true
}

fn edit_education(store: &mut ProfileStore, id: &str, edit: impl FnOnce(&mut Education)) -> bool {
    let mut education = store.education().to_vec();
    let Some(entry) = education.iter_mut().find(|e| e.id == id) else {
        return false;
    };
    edit(entry);
    store.update_education(education);
    true
}
