//! Composition root: one board, one input form, two list views.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::board::ProjectBoard;
use crate::command::{Command, HELP};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::model::ProjectStatus;
use crate::panel::TextPanel;
use crate::screen::Screen;
use crate::seed::SeedFile;
use crate::views::{ProjectInput, ProjectItemView, ProjectListView};

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed or a redraw was requested.
    Redraw(Option<String>),
    /// Nothing changed; show a message.
    Message(String),
    Quit,
}

#[derive(Debug, Serialize)]
struct BoardJson {
    active: Vec<ProjectItemView>,
    finished: Vec<ProjectItemView>,
}

pub struct ProjectBoardApp {
    config: BoardConfig,
    board: ProjectBoard,
    input: ProjectInput,
    active: ProjectListView,
    finished: ProjectListView,
    active_panel: TextPanel,
    finished_panel: TextPanel,
    screen: Screen,
}

impl ProjectBoardApp {
    pub fn new(config: BoardConfig) -> Self {
        let board = ProjectBoard::new();
        let input = ProjectInput::new(&board);

        let active_panel = TextPanel::new(ProjectStatus::Active.heading(), config.width);
        let finished_panel = TextPanel::new(ProjectStatus::Finished.heading(), config.width);
        let active = ProjectListView::new(&board, ProjectStatus::Active, active_panel.clone());
        let finished =
            ProjectListView::new(&board, ProjectStatus::Finished, finished_panel.clone());

        Self {
            screen: Screen::new(config.color),
            config,
            board,
            input,
            active,
            finished,
            active_panel,
            finished_panel,
        }
    }

    #[must_use]
    pub fn board(&self) -> &ProjectBoard {
        &self.board
    }

    #[must_use]
    pub fn view(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    #[must_use]
    pub fn panel(&self, status: ProjectStatus) -> &TextPanel {
        match status {
            ProjectStatus::Active => &self.active_panel,
            ProjectStatus::Finished => &self.finished_panel,
        }
    }

    /// Publish every project in `seed`, in file order. Nothing is published
    /// if any entry is invalid.
    pub fn load_seed(&self, seed: SeedFile) -> Result<usize> {
        let projects = seed.into_projects()?;
        let count = projects.len();
        for project in projects {
            self.board.insert(project);
        }
        debug!(count, "seed loaded");
        Ok(count)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add {
                title,
                description,
                manday,
            } => {
                self.input.set_title(title);
                self.input.set_description(description);
                self.input.set_manday(manday);
                let id = self.input.submit()?;
                Ok(Outcome::Redraw(Some(format!("added #{id}"))))
            }
            Command::Move { id, status } => {
                self.board.move_project(id, status)?;
                Ok(Outcome::Redraw(Some(format!("#{id} is now {status}"))))
            }
            Command::List => Ok(Outcome::Redraw(None)),
            Command::Help => Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Draw both panels.
    pub fn draw<W: Write>(&self, out: &mut W, clear: bool) -> Result<()> {
        self.screen.draw(
            out,
            &[
                (ProjectStatus::Active, &self.active_panel),
                (ProjectStatus::Finished, &self.finished_panel),
            ],
            clear,
        )?;
        Ok(())
    }

    /// Write both views as pretty JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = BoardJson {
            active: self.active.items(),
            finished: self.finished.items(),
        };
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)?;
        Ok(())
    }

    /// Line-oriented session: read commands from `input` until EOF or
    /// `quit`, redrawing after every change. Bad commands are reported and
    /// the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let clear = self.config.clear_screen;
        self.draw(out, clear)?;
        self.screen.prompt(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.screen.prompt(out)?;
                continue;
            }

            match line.parse::<Command>().and_then(|command| self.execute(command)) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Redraw(notice)) => {
                    self.draw(out, clear)?;
                    if let Some(notice) = notice {
                        self.screen.notice(out, &notice)?;
                    }
                }
                Ok(Outcome::Message(message)) => writeln!(out, "{message}")?,
                Err(error) => {
                    warn!(%error, "command rejected");
                    self.screen.notice(out, &format!("error: {error}"))?;
                }
            }
            self.screen.prompt(out)?;
        }
        Ok(())
    }
}
