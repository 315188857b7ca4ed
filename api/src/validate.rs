use std::fmt;

use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub const MAX_POST_CHARS: usize = 500;
pub const MAX_COMMENT_CHARS: usize = 300;

/// The constraint a request body broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required,
    MaxLength { max: usize, actual: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "is required"),
            Violation::MaxLength { max, actual } => {
                write!(f, "must be at most {max} characters (got {actual})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {violation}")]
pub struct ValidationError {
    pub field: String,
    pub violation: Violation,
}

/// Runs the derive rules of a request body and reports the first broken
/// constraint in typed form.
///
/// Lengths are counted in characters, so a 500-character post made of
/// multi-byte glyphs is still accepted.
pub fn check<T: Validate>(input: &T) -> Result<(), ValidationError> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(first_violation(&errors)),
    }
}

fn first_violation(errors: &ValidationErrors) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let Some((field, errs)) = fields.into_iter().next() else {
        return ValidationError {
            field: "body".into(),
            violation: Violation::Required,
        };
    };

    let violation = errs
        .first()
        .map(|err| {
            let actual = err
                .params
                .get("value")
                .and_then(|v| v.as_str())
                .map_or(0, |s| s.chars().count());
            let max = err
                .params
                .get("max")
                .and_then(|v| v.as_u64())
                .map_or(0, |m| m as usize);

            if actual == 0 {
                Violation::Required
            } else {
                Violation::MaxLength { max, actual }
            }
        })
        .unwrap_or(Violation::Required);

    ValidationError {
        field: field.to_string(),
        violation,
    }
}
