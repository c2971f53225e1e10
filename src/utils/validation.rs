use crate::domain::model::{Arity, FragmentKind};
use crate::utils::error::{LadderError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_arity(value: i64) -> Result<Arity> {
    Arity::new(value)
}

/// `from` must be a valid arity no larger than `to`.
pub fn validate_ladder_range(from: i64, to: i64) -> Result<()> {
    if from < 1 || from > to {
        return Err(LadderError::InvalidRange { from, to });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LadderError::ConfigError {
            message: format!(
                "{} = {}: value must be between {} and {}",
                field_name, value, min, max
            ),
        });
    }
    Ok(())
}

pub fn validate_kinds(field_name: &str, kinds: &[FragmentKind]) -> Result<()> {
    if kinds.is_empty() {
        return Err(LadderError::ConfigError {
            message: format!("{}: at least one fragment kind is required", field_name),
        });
    }

    let mut seen = HashSet::new();
    for kind in kinds {
        if !seen.insert(kind) {
            return Err(LadderError::ConfigError {
                message: format!("{}: '{}' is listed more than once", field_name, kind.label()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_arity() {
        assert!(validate_arity(1).is_ok());
        assert!(validate_arity(64).is_ok());
        assert!(validate_arity(0).is_err());
        assert!(validate_arity(-1).is_err());
    }

    #[test]
    fn test_validate_ladder_range() {
        assert!(validate_ladder_range(1, 5).is_ok());
        assert!(validate_ladder_range(5, 5).is_ok());
        assert!(validate_ladder_range(0, 5).is_err());
        assert!(validate_ladder_range(6, 5).is_err());
    }

    #[test]
    fn test_validate_kinds() {
        assert!(validate_kinds("sections.kinds", &FragmentKind::ALL).is_ok());
        assert!(validate_kinds("sections.kinds", &[]).is_err());
        assert!(validate_kinds(
            "sections.kinds",
            &[FragmentKind::Accessor, FragmentKind::Accessor]
        )
        .is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.indent_width", 4usize, 1, 16).is_ok());
        assert!(validate_range("output.indent_width", 0usize, 1, 16).is_err());
    }
}
