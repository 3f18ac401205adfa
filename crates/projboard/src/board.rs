//! The canonical project list.
//!
//! [`ProjectBoard`] is built once by the composition root and handed by
//! reference to every view. Views read through snapshots and change the
//! board only through the methods here.

use projboard_runtime::{ItemId, ObservableList, Snapshot};
use tracing::{debug, info};

use crate::error::{BoardError, Result};
use crate::model::{Project, ProjectStatus};

#[derive(Debug, Clone, Default)]
pub struct ProjectBoard {
    projects: ObservableList<Project>,
}

impl ProjectBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying list, for binding views to it.
    #[must_use]
    pub fn list(&self) -> &ObservableList<Project> {
        &self.projects
    }

    /// Create an active project with a fresh id and publish it.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        manday: u32,
    ) -> ItemId {
        self.insert(Project::new(title, description, manday))
    }

    /// Publish an already constructed project.
    pub fn insert(&self, project: Project) -> ItemId {
        let id = project.id;
        info!(%id, title = %project.title, manday = project.manday, status = %project.status, "project added");
        self.projects.add(project);
        id
    }

    /// Move a project to `status`.
    ///
    /// Moving a project to the status it already has changes nothing and
    /// sends no notification.
    pub fn move_project(&self, id: ItemId, status: ProjectStatus) -> Result<()> {
        let current = self
            .projects
            .with(|projects| projects.iter().find(|p| p.id == id).map(|p| p.status))
            .ok_or(BoardError::UnknownProject { id })?;
        if current == status {
            debug!(%id, %status, "project already in requested status");
            return Ok(());
        }

        self.projects
            .replace(|p| p.id == id, |p| p.with_status(status));
        info!(%id, from = %current, to = %status, "project moved");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<Project> {
        self.projects
            .with(|projects| projects.iter().find(|p| p.id == id).cloned())
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Project> {
        self.projects.snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn add_project_publishes_active_project() {
        let board = ProjectBoard::new();
        let seen = Rc::new(Cell::new(0usize));
        let seen_clone = Rc::clone(&seen);
        board
            .list()
            .add_listener(move |snapshot| seen_clone.set(snapshot.len()));

        let id = board.add_project("A", "alpha project", 5);
        assert_eq!(seen.get(), 1);
        let project = board.get(id).unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.manday, 5);
    }

    #[test]
    fn move_project_replaces_status() {
        let board = ProjectBoard::new();
        let a = board.add_project("A", "alpha project", 5);
        let b = board.add_project("B", "beta project", 25);

        board.move_project(a, ProjectStatus::Finished).unwrap();
        assert_eq!(board.get(a).unwrap().status, ProjectStatus::Finished);
        assert_eq!(board.get(b).unwrap().status, ProjectStatus::Active);

        // Order is preserved.
        let titles: Vec<String> = board.snapshot().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn move_to_same_status_is_silent() {
        let board = ProjectBoard::new();
        let a = board.add_project("A", "alpha project", 5);
        let version = board.list().version();

        board.move_project(a, ProjectStatus::Active).unwrap();
        assert_eq!(board.list().version(), version);
    }

    #[test]
    fn move_unknown_project_fails() {
        let board = ProjectBoard::new();
        let err = board
            .move_project(ItemId::from_raw(u64::MAX), ProjectStatus::Finished)
            .unwrap_err();
        assert!(matches!(err, BoardError::UnknownProject { .. }));
    }
}
