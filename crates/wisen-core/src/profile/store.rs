use super::model::{Education, Profile, ProfilePatch, Skill};

/// The in-memory owner of the profile record and the résumé lists.
///
/// Skills and education are replaced wholesale: callers compute the next
/// list themselves (add, remove, toggle) and hand it over.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: Profile,
    skills: Vec<Skill>,
    education: Vec<Education>,
}

impl ProfileStore {
    pub fn new(profile: Profile, skills: Vec<Skill>, education: Vec<Education>) -> Self {
        Self {
            profile,
            skills,
            education,
        }
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        patch.apply_to(&mut self.profile);
    }

    pub fn update_skills(&mut self, skills: Vec<Skill>) {
        self.skills = skills;
    }

    pub fn update_education(&mut self, education: Vec<Education>) {
        self.education = education;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }
}
