//! Views over the project board.
//!
//! - [`ProjectListView`]: one status-filtered list, bound to the board.
//! - [`ProjectItemView`]: a single project row, rebuilt on every render.
//! - [`ProjectInput`]: the input form that adds projects.

pub mod project_input;
pub mod project_item;
pub mod project_list;

pub use project_input::ProjectInput;
pub use project_item::ProjectItemView;
pub use project_list::ProjectListView;
