//! Session context for the whole site.

use std::sync::Arc;

use wisen_core::config::AppConfig;
use wisen_core::error::Result;
use wisen_core::generation::DescriptionGenerator;
use wisen_core::profile::ProfileStore;
use wisen_core::project::ProjectStore;
use wisen_core::seed;
use wisen_core::storage::DurableStorage;
use wisen_core::{IdGenerator, WisenError};

use crate::auth::SessionFlagStore;
use crate::description::DescriptionService;
use crate::editor::{ProjectEditor, ResumeEditor, SubmitOutcome};
use crate::route::Route;

/// Everything one session of the site needs.
///
/// `Site` owns the seeded domain stores, the restored session flag and the
/// editors, and is passed explicitly to every event handler. Events run one
/// at a time, so plain `&mut` access is enough.
pub struct Site {
    config: AppConfig,
    /// Portfolio projects, most recent first
    projects: ProjectStore,
    /// Profile, skills and education
    profile: ProfileStore,
    auth: SessionFlagStore,
    editor: ProjectEditor,
    resume: ResumeEditor,
    descriptions: DescriptionService,
}

impl Site {
    /// Builds a session from seed data and the persisted sign-in flag.
    ///
    /// Without a generator, description drafts fall back to the fixed text.
    pub async fn start(
        config: AppConfig,
        storage: Arc<dyn DurableStorage>,
        generator: Option<Arc<dyn DescriptionGenerator>>,
    ) -> Self {
        let ids = Arc::new(IdGenerator::new());
        let auth = SessionFlagStore::restore(storage, config.auth.login_delay()).await;
        let descriptions = match generator {
            Some(generator) => DescriptionService::new(generator),
            None => DescriptionService::disabled(),
        };

        tracing::info!(
            "[Site] Session started (generator enabled: {})",
            descriptions.is_enabled()
        );

        Self {
            editor: ProjectEditor::new(ids.clone(), config.editor.clone()),
            resume: ResumeEditor::new(ids),
            projects: seed::seeded_project_store(),
            profile: seed::seeded_profile_store(),
            auth,
            descriptions,
            config,
        }
    }

    /// Applies the admin gate to a requested route.
    pub fn resolve(&self, route: Route) -> Route {
        let resolved = route.resolve(self.auth.is_authenticated());
        if resolved == Route::Login {
            tracing::debug!("[Site] Routed to login");
        }
        resolved
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.auth.login(email, password).await
    }

    /// Signs out and drops any edit in progress.
    pub async fn logout(&mut self) {
        self.auth.logout().await;
        self.editor.cancel();
    }

    // ============================================================================
    // Project editing
    // ============================================================================

    /// Loads a stored project into the editor.
    pub fn begin_edit(&mut self, id: &str) -> Result<()> {
        let project = self
            .projects
            .get(id)
            .ok_or_else(|| WisenError::not_found("Project", id))?;
        self.editor.begin_edit(project);
        Ok(())
    }

    pub fn submit_project(&mut self) -> SubmitOutcome {
        self.editor.submit(&mut self.projects)
    }

    pub async fn generate_description(&mut self) -> Result<()> {
        self.editor.generate_description(&self.descriptions).await
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectStore {
        &mut self.projects
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn editor(&self) -> &ProjectEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ProjectEditor {
        &mut self.editor
    }

    /// The résumé editor together with the store it edits.
    pub fn resume_mut(&mut self) -> (&ResumeEditor, &mut ProfileStore) {
        (&self.resume, &mut self.profile)
    }

    pub fn descriptions(&self) -> &DescriptionService {
        &self.descriptions
    }
}
