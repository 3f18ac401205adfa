use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::model::ProjectStatus;
use crate::panel::TextPanel;

/// Writes panels to a terminal (or any writer) using crossterm commands.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    color: bool,
}

impl Screen {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn panel_color(status: ProjectStatus) -> Color {
        match status {
            ProjectStatus::Active => Color::Green,
            ProjectStatus::Finished => Color::DarkGrey,
        }
    }

    /// Draw `panels` top to bottom. With `clear`, the terminal is wiped and
    /// drawing starts at the top-left corner.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        panels: &[(ProjectStatus, &TextPanel)],
        clear: bool,
    ) -> io::Result<()> {
        if clear {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        for (status, panel) in panels {
            for line in panel.boxed() {
                if self.color {
                    queue!(
                        out,
                        SetForegroundColor(Self::panel_color(*status)),
                        Print(line),
                        ResetColor,
                        Print("\n")
                    )?;
                } else {
                    queue!(out, Print(line), Print("\n"))?;
                }
            }
        }
        out.flush()
    }

    /// Print a one-line notice below the panels.
    pub fn notice<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.color {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset),
                Print("\n")
            )?;
        } else {
            queue!(out, Print(text), Print("\n"))?;
        }
        out.flush()
    }

    pub fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Print("> "))?;
        out.flush()
    }
}
