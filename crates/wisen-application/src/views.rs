//! Read-only projections of the stores for the public pages.

use serde::Serialize;

use wisen_core::profile::{Education, MAX_SKILL_LEVEL, Profile, ProfileStore};
use wisen_core::project::{ChartDatum, ChartKind, Project, ProjectKind, ProjectStore};

use crate::editor::phone_digits;

/// Colours assigned to chart points in order, wrapping around.
pub const CHART_PALETTE: [&str; 4] = ["#5A4797", "#F37712", "#BD606C", "#676363"];

/// Number of KPI cards taken from the first chart.
pub const HIGHLIGHT_COUNT: usize = 3;

const WHATSAPP_BASE: &str = "https://wa.me/";

// ============================================================================
// Portfolio
// ============================================================================

/// Visible projects in store order.
pub fn portfolio_listing(store: &ProjectStore) -> Vec<&Project> {
    store.all().iter().filter(|p| p.is_visible).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredDatum {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayChart {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Vec<ColoredDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project: Project,
    /// Empty for analytical projects.
    pub gallery: Vec<String>,
    /// KPI cards; empty for visual projects.
    pub highlights: Vec<ChartDatum>,
    pub charts: Vec<DisplayChart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "camelCase")]
pub enum ProjectDetailView {
    Found(Box<ProjectDetail>),
    NotFound,
}

/// Looks a project up by id.
///
/// Hidden projects are still returned: they are unlisted, not private.
pub fn project_detail(store: &ProjectStore, id: &str) -> ProjectDetailView {
    let Some(project) = store.get(id) else {
        return ProjectDetailView::NotFound;
    };

    let detail = match project.kind {
        ProjectKind::Visual => ProjectDetail {
            project: project.clone(),
            gallery: project.active_gallery().to_vec(),
            highlights: Vec::new(),
            charts: Vec::new(),
        },
        ProjectKind::Analytical => {
            let charts = project.active_charts();
            let highlights = charts
                .first()
                .map(|c| c.data.iter().take(HIGHLIGHT_COUNT).cloned().collect())
                .unwrap_or_default();
            let charts = charts
                .iter()
                .map(|c| DisplayChart {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    kind: c.kind,
                    data: c
                        .data
                        .iter()
                        .enumerate()
                        .map(|(i, d)| ColoredDatum {
                            name: d.name.clone(),
                            value: d.value,
                            color: CHART_PALETTE[i % CHART_PALETTE.len()],
                        })
                        .collect(),
                })
                .collect();
            ProjectDetail {
                project: project.clone(),
                gallery: Vec::new(),
                highlights,
                charts,
            }
        }
    };
    ProjectDetailView::Found(Box::new(detail))
}

// ============================================================================
// Home
// ============================================================================

/// A skill reshaped for a level bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub level: u8,
    pub full: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub whatsapp: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub profile: Profile,
    pub skills: Vec<SkillBar>,
    pub education: Vec<Education>,
    pub contact: ContactLinks,
}

pub fn home_view(store: &ProfileStore) -> HomeView {
    let profile = store.profile();

    let skills = store
        .skills()
        .iter()
        .filter(|s| s.is_visible)
        .map(|s| SkillBar {
            name: s.name.clone(),
            level: s.level,
            full: MAX_SKILL_LEVEL,
        })
        .collect();

    let education = store
        .education()
        .iter()
        .filter(|e| e.is_visible)
        .cloned()
        .collect();

    let digits = phone_digits(&profile.phone);
    let contact = ContactLinks {
        whatsapp: (!digits.is_empty()).then(|| format!("{WHATSAPP_BASE}{digits}")),
        email: (!profile.email.is_empty()).then(|| format!("mailto:{}", profile.email)),
    };

    HomeView {
        profile: profile.clone(),
        skills,
        education,
        contact,
    }
}
