use serde::Serialize;

use crate::model::Project;

/// Display form of one project.
///
/// Built from a [`Project`] on every render and thrown away afterwards; the
/// effort label is computed here and never stored on the project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectItemView {
    pub id: u64,
    pub title: String,
    pub effort: String,
    pub description: String,
}

impl ProjectItemView {
    #[must_use]
    pub fn new(project: &Project) -> Self {
        Self {
            id: project.id.get(),
            title: project.title.clone(),
            effort: project.effort().to_string(),
            description: project.description.clone(),
        }
    }

    /// Heading line: `#id title (effort)`.
    #[must_use]
    pub fn heading(&self) -> String {
        if self.title.is_empty() {
            format!("#{} ({})", self.id, self.effort)
        } else {
            format!("#{} {} ({})", self.id, self.title, self.effort)
        }
    }
}

impl From<&Project> for ProjectItemView {
    fn from(project: &Project) -> Self {
        Self::new(project)
    }
}
