//! Profile domain module.
//!
//! Holds the single profile record together with the skills and education
//! lists shown on the home page.

mod model;
mod store;

pub use model::{
    clamp_level, Education, Profile, ProfileField, ProfilePatch, Skill, MAX_SKILL_LEVEL,
};
pub use store::ProfileStore;
