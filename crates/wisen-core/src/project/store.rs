use super::model::{Project, ProjectPatch};

/// The in-memory owner of every project for the session.
///
/// New projects are prepended so the collection reads most-recent-first.
/// Mutations addressed to an unknown id are silent no-ops; the returned
/// `bool` only reports whether an entity matched.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `projects` in the given order.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Inserts `project` at the front. Ids are not checked for duplicates.
    pub fn add(&mut self, project: Project) {
        self.projects.insert(0, project);
    }

    /// Merges `patch` into every project with `id`.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> bool {
        let mut matched = false;
        for project in self.matching_mut(id) {
            patch.clone().apply_to(project);
            matched = true;
        }
        matched
    }

    /// Removes the project with `id`.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    /// Flips the visibility flag of every project with `id`.
    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        let mut matched = false;
        for project in self.matching_mut(id) {
            project.is_visible = !project.is_visible;
            matched = true;
        }
        matched
    }

    /// All projects in store order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn matching_mut<'a>(
        &'a mut self,
        id: &'a str,
    ) -> impl Iterator<Item = &'a mut Project> + 'a {
        self.projects.iter_mut().filter(move |p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
