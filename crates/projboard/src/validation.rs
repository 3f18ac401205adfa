//! Field rules for the project input form.
//!
//! A [`Validatable`] pairs a value with the rules it must satisfy. Length
//! rules only apply to text and range rules only apply to numbers, so a rule
//! that does not fit the value's kind is ignored.

use std::fmt;

use thiserror::Error;

/// Input form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Manday,
}

impl Field {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Manday => "manday",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    BelowMin { min: f64 },
    AboveMax { max: f64 },
    NotANumber,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::BelowMin { min } => write!(f, "must be at least {min}"),
            Self::AboveMax { max } => write!(f, "must be at most {max}"),
            Self::NotANumber => f.write_str("must be a whole number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{field} {violation}")]
pub struct ValidationError {
    pub field: Field,
    pub violation: Violation,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

/// A value plus the rules it is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validatable<'a> {
    value: Value<'a>,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

impl<'a> Validatable<'a> {
    #[must_use]
    pub fn text(value: &'a str) -> Self {
        Self::of(Value::Text(value))
    }

    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::of(Value::Number(value))
    }

    fn of(value: Value<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Check every rule, reporting the first one broken.
    pub fn check(&self) -> Result<(), Violation> {
        match self.value {
            Value::Text(text) => {
                if self.required && text.trim().is_empty() {
                    return Err(Violation::Required);
                }
                // Lengths count characters, not bytes.
                let len = text.chars().count();
                if let Some(min) = self.min_length.filter(|&min| len < min) {
                    return Err(Violation::TooShort { min });
                }
                if let Some(max) = self.max_length.filter(|&max| len > max) {
                    return Err(Violation::TooLong { max });
                }
            }
            Value::Number(number) => {
                if number.is_nan() {
                    return Err(Violation::NotANumber);
                }
                if let Some(min) = self.min.filter(|&min| number < min) {
                    return Err(Violation::BelowMin { min });
                }
                if let Some(max) = self.max.filter(|&max| number > max) {
                    return Err(Violation::AboveMax { max });
                }
            }
        }
        Ok(())
    }

    /// [`check`](Self::check), attributing a failure to `field`.
    pub fn validate(&self, field: Field) -> Result<(), ValidationError> {
        self.check().map_err(|violation| ValidationError::new(field, violation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_text_always_passes() {
        assert_eq!(Validatable::text("").check(), Ok(()));
        assert_eq!(Validatable::text("   ").check(), Ok(()));
    }

    #[test]
    fn required_rejects_blank_text() {
        assert_eq!(
            Validatable::text("  \t").required().check(),
            Err(Violation::Required)
        );
        assert_eq!(Validatable::text(" x ").required().check(), Ok(()));
    }

    #[test]
    fn length_counts_characters() {
        let rule = |s| Validatable::text(s).min_length(5).max_length(6);
        assert_eq!(rule("abcd").check(), Err(Violation::TooShort { min: 5 }));
        assert_eq!(rule("abcde").check(), Ok(()));
        assert_eq!(rule("日本語テキスト").check(), Err(Violation::TooLong { max: 6 }));
        assert_eq!(rule("日本語テキ").check(), Ok(()));
    }

    #[test]
    fn number_range_is_inclusive() {
        let rule = |n| Validatable::number(n).required().min(1.0).max(1000.0);
        assert_eq!(rule(0.0).check(), Err(Violation::BelowMin { min: 1.0 }));
        assert_eq!(rule(1.0).check(), Ok(()));
        assert_eq!(rule(1000.0).check(), Ok(()));
        assert_eq!(rule(1000.5).check(), Err(Violation::AboveMax { max: 1000.0 }));
        assert_eq!(rule(f64::NAN).check(), Err(Violation::NotANumber));
    }

    #[test]
    fn rules_of_the_other_kind_are_ignored() {
        assert_eq!(Validatable::text("a").min(5.0).check(), Ok(()));
        assert_eq!(Validatable::number(1.0).min_length(5).check(), Ok(()));
    }

    #[test]
    fn error_message_names_field() {
        let err = Validatable::text("abc")
            .required()
            .min_length(5)
            .validate(Field::Description)
            .unwrap_err();
        assert_eq!(err.to_string(), "description must be at least 5 characters");

        let err = Validatable::number(0.0).min(1.0).validate(Field::Manday).unwrap_err();
        assert_eq!(err.to_string(), "manday must be at least 1");
    }
}
