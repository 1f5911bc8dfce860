//! Project domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which of the two optional payloads of a project is meaningful.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ProjectKind {
    /// Case study presented through an image gallery.
    #[default]
    Visual,
    /// Case study presented through charts.
    Analytical,
}

/// Chart rendering variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

/// A single named value in a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// A point survives a save only with a name and a positive value.
    pub fn is_publishable(&self) -> bool {
        !self.name.is_empty() && self.value > 0.0
    }
}

/// A titled, typed dataset attached to an analytical project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectChart {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Vec<ChartDatum>,
}

impl ProjectChart {
    /// Creates an untitled bar chart with one empty data point.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            kind: ChartKind::Bar,
            data: vec![ChartDatum::default()],
        }
    }

    /// Returns the chart with empty or non-positive points removed, or
    /// `None` when the chart has no title or no point survives.
    pub fn publishable(&self) -> Option<ProjectChart> {
        if self.title.is_empty() {
            return None;
        }
        let data: Vec<ChartDatum> = self
            .data
            .iter()
            .filter(|d| d.is_publishable())
            .cloned()
            .collect();
        if data.is_empty() {
            return None;
        }
        Some(ProjectChart {
            data,
            ..self.clone()
        })
    }
}

/// A portfolio entry.
///
/// Exactly one of `gallery` / `charts` is meaningful, selected by `kind`.
/// The other may be present but is ignored by every reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    /// Cover image reference
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<ProjectChart>>,
    pub is_visible: bool,
}

impl Project {
    /// Gallery images when the project is visual, empty otherwise.
    pub fn active_gallery(&self) -> &[String] {
        match (self.kind, &self.gallery) {
            (ProjectKind::Visual, Some(gallery)) => gallery,
            _ => &[],
        }
    }

    /// Charts when the project is analytical, empty otherwise.
    pub fn active_charts(&self) -> &[ProjectChart] {
        match (self.kind, &self.charts) {
            (ProjectKind::Analytical, Some(charts)) => charts,
            _ => &[],
        }
    }
}

/// Field-by-field update for a [`Project`].
///
/// Every `Some` overwrites the matching field; `None` leaves it untouched.
/// The payload fields are doubly optional so a patch can clear them:
/// `Some(None)` removes the gallery or charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ProjectKind>,
    pub image_url: Option<String>,
    pub gallery: Option<Option<Vec<String>>>,
    pub charts: Option<Option<Vec<ProjectChart>>>,
    pub is_visible: Option<bool>,
}

impl ProjectPatch {
    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(kind) = self.kind {
            project.kind = kind;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(gallery) = self.gallery {
            project.gallery = gallery;
        }
        if let Some(charts) = self.charts {
            project.charts = charts;
        }
        if let Some(is_visible) = self.is_visible {
            project.is_visible = is_visible;
        }
    }
}
