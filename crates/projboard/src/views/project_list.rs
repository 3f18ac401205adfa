use projboard_runtime::{RenderBinding, RenderTarget};

use crate::board::ProjectBoard;
use crate::model::{Project, ProjectStatus};
use crate::views::ProjectItemView;

/// The projects of one status, kept in sync with the board.
///
/// On every board change the view re-filters the full snapshot and
/// re-renders its target from scratch.
#[derive(Debug, Clone)]
pub struct ProjectListView {
    status: ProjectStatus,
    binding: RenderBinding<ProjectItemView>,
}

impl ProjectListView {
    pub fn new(
        board: &ProjectBoard,
        status: ProjectStatus,
        target: impl RenderTarget<ProjectItemView> + 'static,
    ) -> Self {
        let binding = RenderBinding::bind(
            board.list(),
            move |project: &Project| project.status == status,
            ProjectItemView::new,
            target,
        );
        Self { status, binding }
    }

    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.status.heading()
    }

    /// Items from the most recent render.
    #[must_use]
    pub fn items(&self) -> Vec<ProjectItemView> {
        self.binding.rendered()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.binding.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.binding.is_empty()
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.binding.render_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projboard_runtime::RuntimeError;

    fn discard(_: &[ProjectItemView]) -> Result<(), RuntimeError> {
        Ok(())
    }

    #[test]
    fn active_and_finished_lists_split_the_board() {
        let board = ProjectBoard::new();
        let active = ProjectListView::new(&board, ProjectStatus::Active, discard);
        let finished = ProjectListView::new(&board, ProjectStatus::Finished, discard);

        let a = board.add_project("A", "alpha project", 5);
        board.add_project("B", "beta project", 25);
        board.move_project(a, ProjectStatus::Finished).unwrap();

        let titles = |view: &ProjectListView| -> Vec<String> {
            view.items().into_iter().map(|item| item.title).collect()
        };
        assert_eq!(titles(&active), vec!["B"]);
        assert_eq!(titles(&finished), vec!["A"]);
        assert_eq!(active.heading(), "Active Projects");
        assert_eq!(finished.heading(), "Finished Projects");
    }

    #[test]
    fn view_of_a_seeded_board_renders_on_construction() {
        let board = ProjectBoard::new();
        board.add_project("A", "alpha project", 5);

        let active = ProjectListView::new(&board, ProjectStatus::Active, discard);
        assert_eq!(active.len(), 1);
        assert_eq!(active.render_count(), 1);
    }
}
