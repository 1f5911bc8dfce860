//! Admin editing workflow.
//!
//! - [`ProjectEditor`]: create/edit form for portfolio projects
//! - [`ResumeEditor`]: profile, skills and education edits
//! - [`format_phone`]: as-you-type phone mask

mod notice;
mod phone;
mod project_form;
mod resume;

pub use notice::Notice;
pub use phone::{format_phone, phone_digits};
pub use project_form::{
    EditorMode, ProjectEditor, ProjectForm, SubmitOutcome, CREATED_NOTICE,
    MISSING_TITLE_OR_CATEGORY, UPDATED_NOTICE,
};
pub use resume::ResumeEditor;
