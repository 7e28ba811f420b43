//! Request extractors that validate before the handler runs.
//!
//! Every rejection, whether from deserialization or from a rule, becomes
//! `AppError::Validation` and answers 400.

mod validated_json;
mod validated_path;
mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;

use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, AppResult};

/// Run the rule table of a freshly extracted value
fn checked<T: Validate>(value: T) -> AppResult<T> {
    value
        .validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
    Ok(value)
}

/// Join rule messages, ordered by field name, into one sentence
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(" and ")
}
