//! Project form of the admin panel.
//!
//! The editor is a two-mode state machine. In `Create` mode a submission
//! adds a new project; selecting an existing project switches to `Edit`
//! mode and a submission patches it in place. Either way the form resets
//! afterwards.

use std::sync::Arc;

use rand::Rng;

use wisen_core::config::EditorSettings;
use wisen_core::error::Result;
use wisen_core::project::{
    ChartDatum, ChartKind, Project, ProjectChart, ProjectKind, ProjectPatch, ProjectStore,
};
use wisen_core::{IdGenerator, WisenError};

use super::notice::Notice;
use crate::description::DescriptionService;

pub const CREATED_NOTICE: &str = "Projeto adicionado com sucesso!";
pub const UPDATED_NOTICE: &str = "Projeto atualizado com sucesso!";
pub const MISSING_TITLE_OR_CATEGORY: &str =
    "Por favor, preencha o Título e a Categoria para gerar a descrição.";

/// Whether a submission creates a project or updates one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
}

/// Plain text fields of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    pub kind: ProjectKind,
    pub description: String,
    pub image_url: String,
}

/// What a submission did to the project store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    Updated { id: String },
}

/// Form state plus the gallery and chart builders.
pub struct ProjectEditor {
    mode: EditorMode,
    form: ProjectForm,
    gallery: Vec<String>,
    chart_blocks: Vec<ProjectChart>,
    loading: bool,
    notice: Option<Notice>,
    ids: Arc<IdGenerator>,
    settings: EditorSettings,
}

impl ProjectEditor {
    pub fn new(ids: Arc<IdGenerator>, settings: EditorSettings) -> Self {
        let first_block = ProjectChart::placeholder(ids.next_id());
        Self {
            mode: EditorMode::Create,
            form: ProjectForm::default(),
            gallery: Vec::new(),
            chart_blocks: vec![first_block],
            loading: false,
            notice: None,
            ids,
            settings,
        }
    }

    // ============================================================================
    // Mode transitions
    // ============================================================================

    /// Loads `project` into the form and switches to edit mode.
    ///
    /// The gallery is loaded only for visual projects and the charts only
    /// for analytical ones; the other builder starts fresh.
    pub fn begin_edit(&mut self, project: &Project) {
        self.mode = EditorMode::Edit {
            id: project.id.clone(),
        };
        self.form = ProjectForm {
            title: project.title.clone(),
            category: project.category.clone(),
            kind: project.kind,
            description: project.description.clone(),
            image_url: project.image_url.clone(),
        };

        self.gallery = match (project.kind, &project.gallery) {
            (ProjectKind::Visual, Some(gallery)) => gallery.clone(),
            _ => Vec::new(),
        };
        self.chart_blocks = match (project.kind, &project.charts) {
            (ProjectKind::Analytical, Some(charts)) => charts.clone(),
            _ => vec![self.placeholder_block()],
        };

        tracing::debug!("[Editor] Editing project {}", project.id);
    }

    /// Drops any edit in progress and returns to an empty create form.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Create;
        self.form = ProjectForm::default();
        self.gallery.clear();
        self.chart_blocks = vec![self.placeholder_block()];
    }

    fn placeholder_block(&self) -> ProjectChart {
        ProjectChart::placeholder(self.ids.next_id())
    }

    // ============================================================================
    // Field setters
    // ============================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.form.category = category.into();
    }

    pub fn set_kind(&mut self, kind: ProjectKind) {
        self.form.kind = kind;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.form.image_url = image_url.into();
    }

    // ============================================================================
    // Gallery builder
    // ============================================================================

    /// Appends dropped or selected images in order.
    pub fn add_gallery_images<I, S>(&mut self, images: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gallery.extend(images.into_iter().map(Into::into));
    }

    pub fn remove_gallery_image(&mut self, index: usize) {
        if index < self.gallery.len() {
            self.gallery.remove(index);
        }
    }

    // ============================================================================
    // Chart builder
    // ============================================================================

    pub fn add_chart_block(&mut self) {
        let block = self.placeholder_block();
        self.chart_blocks.push(block);
    }

    pub fn remove_chart_block(&mut self, index: usize) {
        if index < self.chart_blocks.len() {
            self.chart_blocks.remove(index);
        }
    }

    pub fn set_chart_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(block) = self.chart_blocks.get_mut(index) {
            block.title = title.into();
        }
    }

    pub fn set_chart_kind(&mut self, index: usize, kind: ChartKind) {
        if let Some(block) = self.chart_blocks.get_mut(index) {
            block.kind = kind;
        }
    }

    pub fn add_data_point(&mut self, chart: usize) {
        if let Some(block) = self.chart_blocks.get_mut(chart) {
            block.data.push(ChartDatum::default());
        }
    }

    pub fn remove_data_point(&mut self, chart: usize, point: usize) {
        if let Some(block) = self.chart_blocks.get_mut(chart) {
            if point < block.data.len() {
                block.data.remove(point);
            }
        }
    }

    pub fn set_data_point_name(&mut self, chart: usize, point: usize, name: impl Into<String>) {
        if let Some(datum) = self.datum_mut(chart, point) {
            datum.name = name.into();
        }
    }

    pub fn set_data_point_value(&mut self, chart: usize, point: usize, value: f64) {
        if let Some(datum) = self.datum_mut(chart, point) {
            datum.value = value;
        }
    }

    fn datum_mut(&mut self, chart: usize, point: usize) -> Option<&mut ChartDatum> {
        self.chart_blocks.get_mut(chart)?.data.get_mut(point)
    }

    // ============================================================================
    // Description generation
    // ============================================================================

    /// Replaces the description with a generated draft.
    ///
    /// Rejected without any state change unless both title and category are
    /// filled in. Collaborator failures arrive here already replaced by the
    /// service's fallback text.
    pub async fn generate_description(&mut self, service: &DescriptionService) -> Result<()> {
        if self.form.title.is_empty() || self.form.category.is_empty() {
            return Err(WisenError::validation(MISSING_TITLE_OR_CATEGORY));
        }

        self.loading = true;
        let description = service
            .generate(&self.form.title, &self.form.category)
            .await;
        self.form.description = description;
        self.loading = false;
        Ok(())
    }

    // ============================================================================
    // Submission
    // ============================================================================

    /// Turns the form into a project and writes it to `store`.
    ///
    /// Visual projects keep the gallery as-is. Analytical projects keep only
    /// titled charts with at least one named, positive data point. An empty
    /// cover is replaced by a random stock photo.
    pub fn submit(&mut self, store: &mut ProjectStore) -> SubmitOutcome {
        let image_url = if self.form.image_url.is_empty() {
            self.placeholder_image()
        } else {
            self.form.image_url.clone()
        };

        let (gallery, charts) = match self.form.kind {
            ProjectKind::Visual => (Some(self.gallery.clone()), None),
            ProjectKind::Analytical => {
                let charts: Vec<ProjectChart> = self
                    .chart_blocks
                    .iter()
                    .filter_map(ProjectChart::publishable)
                    .collect();
                (None, Some(charts))
            }
        };

        let outcome = match &self.mode {
            EditorMode::Edit { id } => {
                let patch = ProjectPatch {
                    title: Some(self.form.title.clone()),
                    category: Some(self.form.category.clone()),
                    description: Some(self.form.description.clone()),
                    kind: Some(self.form.kind),
                    image_url: Some(image_url),
                    gallery: Some(gallery),
                    charts: Some(charts),
                    is_visible: None,
                };
                if !store.update(id, patch) {
                    tracing::warn!("[Editor] Project {} vanished before update", id);
                }
                SubmitOutcome::Updated { id: id.clone() }
            }
            EditorMode::Create => {
                let id = self.ids.next_id();
                store.add(Project {
                    id: id.clone(),
                    title: self.form.title.clone(),
                    category: self.form.category.clone(),
                    description: self.form.description.clone(),
                    kind: self.form.kind,
                    image_url,
                    gallery,
                    charts,
                    is_visible: true,
                });
                SubmitOutcome::Created { id }
            }
        };

        let message = match outcome {
            SubmitOutcome::Created { .. } => CREATED_NOTICE,
            SubmitOutcome::Updated { .. } => UPDATED_NOTICE,
        };
        tracing::info!("[Editor] {:?}", outcome);
        self.notice = Some(Notice::new(message, self.settings.notice_duration()));
        self.reset();
        outcome
    }

    fn placeholder_image(&self) -> String {
        let n: u32 = rand::thread_rng().gen_range(0..100);
        format!("{}?random={}", self.settings.placeholder_image_base, n)
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    pub fn chart_blocks(&self) -> &[ProjectChart] {
        &self.chart_blocks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The success notice while it has not expired yet.
    pub fn notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.is_active())
            .map(Notice::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wisen_core::seed;

    fn editor() -> ProjectEditor {
        ProjectEditor::new(Arc::new(IdGenerator::new()), EditorSettings::default())
    }

    #[test]
    fn test_starts_in_create_mode_with_one_placeholder_block() {
        let editor = editor();
        assert_eq!(editor.mode(), &EditorMode::Create);
        assert_eq!(editor.chart_blocks().len(), 1);
        assert_eq!(editor.chart_blocks()[0].data, vec![ChartDatum::default()]);
        assert!(editor.gallery().is_empty());
    }

    #[test]
    fn test_begin_edit_visual_loads_gallery_and_fresh_block() {
        let mut editor = editor();
        let project = &seed::initial_projects()[0];
        editor.begin_edit(project);

        assert!(editor.is_editing());
        assert_eq!(editor.form().title, project.title);
        assert_eq!(editor.gallery(), project.gallery.as_deref().unwrap());
        assert_eq!(editor.chart_blocks().len(), 1);
        assert!(editor.chart_blocks()[0].title.is_empty());
    }

    #[test]
    fn test_begin_edit_analytical_loads_charts_and_empty_gallery() {
        let mut editor = editor();
        let project = &seed::initial_projects()[1];
        editor.begin_edit(project);

        assert!(editor.gallery().is_empty());
        assert_eq!(editor.chart_blocks(), project.charts.as_deref().unwrap());
    }

    #[test]
    fn test_cancel_resets_everything_and_regenerates_block() {
        let mut editor = editor();
        let project = &seed::initial_projects()[1];
        editor.begin_edit(project);
        editor.add_gallery_images(["x.png"]);

        editor.cancel();
        assert_eq!(editor.mode(), &EditorMode::Create);
        assert_eq!(editor.form(), &ProjectForm::default());
        assert!(editor.gallery().is_empty());
        assert_eq!(editor.chart_blocks().len(), 1);
        assert!(editor.chart_blocks()[0].title.is_empty());
        assert_ne!(editor.chart_blocks()[0].id, "c1");
    }

    #[test]
    fn test_gallery_add_and_remove_by_index() {
        let mut editor = editor();
        editor.add_gallery_images(["a", "b", "c"]);
        editor.remove_gallery_image(1);
        editor.remove_gallery_image(10);
        assert_eq!(editor.gallery(), ["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_chart_builder_ignores_out_of_range_indices() {
        let mut editor = editor();
        editor.add_chart_block();
        editor.set_chart_title(1, "Leads");
        editor.set_chart_kind(1, ChartKind::Pie);
        editor.add_data_point(1);
        editor.set_data_point_name(1, 1, "Email");
        editor.set_data_point_value(1, 1, 25.0);

        editor.set_chart_title(7, "nope");
        editor.remove_data_point(7, 0);
        editor.set_data_point_value(1, 9, 1.0);

        let block = &editor.chart_blocks()[1];
        assert_eq!(block.title, "Leads");
        assert_eq!(block.kind, ChartKind::Pie);
        assert_eq!(block.data[1], ChartDatum::new("Email", 25.0));

        editor.remove_data_point(1, 0);
        assert_eq!(editor.chart_blocks()[1].data.len(), 1);
        editor.remove_chart_block(0);
        assert_eq!(editor.chart_blocks().len(), 1);
        assert_eq!(editor.chart_blocks()[0].title, "Leads");
    }

    #[test]
    fn test_analytical_submit_filters_points_and_blocks() {
        let mut editor = editor();
        let mut store = ProjectStore::new();
        editor.set_title("Campanha");
        editor.set_category("Performance");
        editor.set_kind(ProjectKind::Analytical);
        editor.set_image_url("cover.png");

        editor.set_chart_title(0, "X");
        editor.set_data_point_name(0, 0, "A");
        editor.set_data_point_value(0, 0, 0.0);
        editor.add_data_point(0);
        editor.set_data_point_value(0, 1, 5.0);
        editor.add_data_point(0);
        editor.set_data_point_name(0, 2, "B");
        editor.set_data_point_value(0, 2, 10.0);

        editor.add_chart_block();
        editor.set_chart_title(1, "Only zeros");
        editor.set_data_point_name(1, 0, "Z");

        editor.add_chart_block();
        editor.set_data_point_name(2, 0, "Untitled");
        editor.set_data_point_value(2, 0, 3.0);

        let SubmitOutcome::Created { id } = editor.submit(&mut store) else {
            panic!("expected a created project");
        };
        let project = store.get(&id).unwrap();
        let charts = project.charts.as_ref().unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "X");
        assert_eq!(charts[0].data, vec![ChartDatum::new("B", 10.0)]);
        assert!(project.gallery.is_none());
    }

    #[test]
    fn test_visual_submit_without_cover_generates_placeholder() {
        let mut editor = editor();
        let mut store = ProjectStore::new();
        editor.set_title("Sem capa");

        let SubmitOutcome::Created { id } = editor.submit(&mut store) else {
            panic!("expected a created project");
        };
        let project = store.get(&id).unwrap();
        assert!(project.image_url.starts_with("https://picsum.photos/800/600?random="));
        assert_eq!(project.gallery.as_deref(), Some(&[][..]));
        assert!(project.charts.is_none());
        assert!(project.is_visible);
    }

    #[test]
    fn test_create_prepends_and_resets() {
        let mut editor = editor();
        let mut store = seed::seeded_project_store();
        editor.set_title("Novo");
        editor.add_gallery_images(["g.png"]);

        let outcome = editor.submit(&mut store);
        assert!(matches!(outcome, SubmitOutcome::Created { .. }));
        assert_eq!(store.all()[0].title, "Novo");
        assert_eq!(store.len(), 4);
        assert_eq!(editor.form(), &ProjectForm::default());
        assert!(editor.gallery().is_empty());
    }

    #[test]
    fn test_edit_keeps_id_and_visibility() {
        let mut editor = editor();
        let mut store = seed::seeded_project_store();
        store.toggle_visibility("3");
        let project = store.get("3").unwrap().clone();

        editor.begin_edit(&project);
        editor.set_title("Renomeado");
        let outcome = editor.submit(&mut store);

        assert_eq!(outcome, SubmitOutcome::Updated { id: "3".to_string() });
        let updated = store.get("3").unwrap();
        assert_eq!(updated.title, "Renomeado");
        assert!(!updated.is_visible);
        assert_eq!(store.len(), 3);
        assert_eq!(editor.mode(), &EditorMode::Create);
    }

    #[test]
    fn test_switching_kind_clears_inactive_payload() {
        let mut editor = editor();
        let mut store = seed::seeded_project_store();
        let project = store.get("1").unwrap().clone();

        editor.begin_edit(&project);
        editor.set_kind(ProjectKind::Analytical);
        editor.set_chart_title(0, "KPIs");
        editor.set_data_point_name(0, 0, "CTR");
        editor.set_data_point_value(0, 0, 4.2);
        editor.submit(&mut store);

        let updated = store.get("1").unwrap();
        assert!(updated.gallery.is_none());
        assert_eq!(updated.active_charts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_expires_after_three_seconds() {
        let mut editor = editor();
        let mut store = ProjectStore::new();
        editor.submit(&mut store);
        assert_eq!(editor.notice(), Some(CREATED_NOTICE));

        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(editor.notice(), None);
    }

    #[tokio::test]
    async fn test_generate_requires_title_and_category() {
        let mut editor = editor();
        editor.set_title("Só título");
        editor.set_description("original");

        let err = editor
            .generate_description(&DescriptionService::disabled())
            .await
            .unwrap_err();
        assert_eq!(err, WisenError::validation(MISSING_TITLE_OR_CATEGORY));
        assert_eq!(editor.form().description, "original");
        assert!(!editor.is_loading());
    }

    #[tokio::test]
    async fn test_generate_overwrites_only_description() {
        let mut editor = editor();
        editor.set_title("Campanha");
        editor.set_category("Performance");

        editor
            .generate_description(&DescriptionService::disabled())
            .await
            .unwrap();
        assert_eq!(
            editor.form().description,
            crate::description::GENERATION_FALLBACK
        );
        assert_eq!(editor.form().title, "Campanha");
        assert!(!editor.is_loading());
    }
}
