use std::fmt;
use std::str::FromStr;

use projboard_runtime::ItemId;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Man-days that make up one man-month.
pub const MANDAYS_PER_MONTH: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    /// Heading shown above the list of projects in this status.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active Projects",
            ProjectStatus::Finished => "Finished Projects",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" | "done" => Ok(ProjectStatus::Finished),
            other => Err(BoardError::invalid(format!("unknown status `{other}`"))),
        }
    }
}

/// A project on the board.
///
/// Projects are never edited in place: a status change builds a new value
/// with [`with_status`](Self::with_status) and replaces the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub manday: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// New active project with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, manday: u32) -> Self {
        Self {
            id: ItemId::next(),
            title: title.into(),
            description: description.into(),
            manday,
            status: ProjectStatus::Active,
        }
    }

    #[must_use]
    pub fn with_status(&self, status: ProjectStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn effort(&self) -> Effort {
        Effort::from_mandays(self.manday)
    }
}

/// Display form of a project's size, derived from its man-days at render
/// time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effort {
    ManDays(u32),
    ManMonths(f64),
}

impl Effort {
    #[must_use]
    pub fn from_mandays(mandays: u32) -> Self {
        if mandays < MANDAYS_PER_MONTH {
            Effort::ManDays(mandays)
        } else {
            Effort::ManMonths(f64::from(mandays) / f64::from(MANDAYS_PER_MONTH))
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effort::ManDays(days) => write!(f, "{days} md"),
            Effort::ManMonths(months) => write!(f, "{months} mm"),
        }
    }
}
