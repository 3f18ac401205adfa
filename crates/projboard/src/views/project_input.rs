use projboard_runtime::ItemId;

use crate::board::ProjectBoard;
use crate::validation::{Field, Validatable, ValidationError, Violation};

pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const MANDAY_MIN: u32 = 1;
pub const MANDAY_MAX: u32 = 1000;

/// Input form for new projects.
///
/// Holds the raw field text until [`submit`](Self::submit) validates it and
/// adds a project to the board.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    board: ProjectBoard,
    title: String,
    description: String,
    manday: String,
}

impl ProjectInput {
    #[must_use]
    pub fn new(board: &ProjectBoard) -> Self {
        Self {
            board: board.clone(),
            title: String::new(),
            description: String::new(),
            manday: String::new(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_manday(&mut self, value: impl Into<String>) {
        self.manday = value.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn manday(&self) -> &str {
        &self.manday
    }

    /// Validate the fields and add the project.
    ///
    /// Title and description are stored exactly as validated. On success
    /// the fields are cleared. On failure they are left as typed.
    pub fn submit(&mut self) -> Result<ItemId, ValidationError> {
        let manday = self.gather()?;
        let id = self.board.add_project(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.description),
            manday,
        );
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.manday.clear();
    }

    /// Check every field, returning the parsed man-days.
    fn gather(&self) -> Result<u32, ValidationError> {
        Validatable::text(&self.title).validate(Field::Title)?;
        check_description(&self.description)?;

        let raw = self.manday.trim();
        if raw.is_empty() {
            return Err(ValidationError::new(Field::Manday, Violation::Required));
        }
        let manday: u32 = raw
            .parse()
            .map_err(|_| ValidationError::new(Field::Manday, Violation::NotANumber))?;
        check_manday(manday)?;
        Ok(manday)
    }
}

/// Description rules shared by the form and seed files.
pub fn check_description(description: &str) -> Result<(), ValidationError> {
    Validatable::text(description)
        .required()
        .min_length(DESCRIPTION_MIN_LENGTH)
        .validate(Field::Description)
}

pub fn check_manday(manday: u32) -> Result<(), ValidationError> {
    Validatable::number(f64::from(manday))
        .required()
        .min(f64::from(MANDAY_MIN))
        .max(f64::from(MANDAY_MAX))
        .validate(Field::Manday)
}
