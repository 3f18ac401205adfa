#![forbid(unsafe_code)]

//! Terminal project board.
//!
//! Projects live in one [`ProjectBoard`]; an Active and a Finished
//! [`ProjectListView`] are bound to it and re-render their [`TextPanel`]s
//! whenever it changes. New projects come in through [`ProjectInput`].

pub mod app;
pub mod board;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod panel;
pub mod screen;
pub mod seed;
pub mod validation;
pub mod views;

pub use app::{Outcome, ProjectBoardApp};
pub use board::ProjectBoard;
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use model::{Effort, Project, ProjectStatus};
pub use panel::TextPanel;
pub use views::{ProjectInput, ProjectItemView, ProjectListView};
