//! Input validation for catalogue and selection.
//!
//! Checks structural integrity before planning. Detects:
//! - Duplicate source names
//! - Sources with no schedulable units (extent below 2)
//! - Tier overrides naming unknown sources
//! - Selection entries naming unknown sources
//!
//! The planner itself tolerates all of these (empty queues are dropped,
//! unknown names fall back to defaults), so validation is advisory:
//! call it to surface configuration mistakes, not to guard the engine.

use std::collections::HashSet;

use crate::models::{Catalogue, Selection};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sources share the same name.
    DuplicateSource,
    /// A source's extent yields no units.
    EmptySource,
    /// A tier override names a source not in the catalogue.
    UnknownOverride,
    /// A selection entry names a source not in the catalogue.
    UnknownSelection,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalogue and selection pair.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(catalogue: &Catalogue, selection: &Selection) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for source in catalogue.sources() {
        if !names.insert(source.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSource,
                format!("Duplicate source name: {}", source.name),
            ));
        }
        if source.units.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySource,
                format!(
                    "Source '{}' has extent {} and no schedulable units",
                    source.name, source.total
                ),
            ));
        }
    }

    for name in catalogue.overrides().keys() {
        if !names.contains(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownOverride,
                format!("Tier override references unknown source '{name}'"),
            ));
        }
    }

    for name in selection.disabled_names().chain(selection.repeat_names()) {
        if !names.contains(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSelection,
                format!("Selection references unknown source '{name}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Source, Tier};

    #[test]
    fn test_valid_input() {
        let cat = Catalogue::daf_yomi();
        let sel = Selection::new()
            .with_disabled("Niddah")
            .with_repeats("Brachos", 2);
        assert!(validate_input(&cat, &sel).is_ok());
    }

    #[test]
    fn test_duplicate_source() {
        let cat = Catalogue::new()
            .with_source(Source::new("A", 20))
            .with_source(Source::new("A", 30));
        let errors = validate_input(&cat, &Selection::new()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateSource);
    }

    #[test]
    fn test_empty_source() {
        let cat = Catalogue::new().with_source(Source::new("stub", 1));
        let errors = validate_input(&cat, &Selection::new()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptySource);
    }

    #[test]
    fn test_unknown_override() {
        let cat = Catalogue::new()
            .with_source(Source::new("A", 20))
            .with_override("ghost", Tier::Heavy);
        let errors = validate_input(&cat, &Selection::new()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownOverride);
    }

    #[test]
    fn test_unknown_selection() {
        let cat = Catalogue::new().with_source(Source::new("A", 20));
        let sel = Selection::new().with_repeats("ghost", 2);
        let errors = validate_input(&cat, &sel).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownSelection);
    }

    #[test]
    fn test_all_errors_reported() {
        let cat = Catalogue::new()
            .with_source(Source::new("A", 1))
            .with_override("ghost", Tier::Light);
        let sel = Selection::new().with_disabled("phantom");
        let errors = validate_input(&cat, &sel).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
