//! JSON seed files.
//!
//! ```json
//! {"projects": [{"title": "Docs", "description": "write the guide", "manday": 12, "status": "active"}]}
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BoardError, Result};
use crate::model::{Project, ProjectStatus};
use crate::views::project_input::{check_description, check_manday};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub projects: Vec<SeedProject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub manday: u32,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BoardError::MissingSeed {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Projects in file order, each with a fresh id.
    ///
    /// Entries go through the same rules as the input form. The first
    /// invalid entry fails the whole file.
    pub fn into_projects(self) -> Result<Vec<Project>> {
        self.projects
            .into_iter()
            .enumerate()
            .map(|(index, seed)| -> Result<Project> {
                check_description(&seed.description)
                    .and_then(|()| check_manday(seed.manday))
                    .map_err(|source| BoardError::InvalidSeed { index, source })?;
                Ok(Project::new(seed.title, seed.description, seed.manday)
                    .with_status(seed.status))
            })
            .collect()
    }
}
