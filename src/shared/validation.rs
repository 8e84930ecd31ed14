//! Validation Utilities

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::error::AppError;

/// Message used by every required-field rule.
pub const BLANK: &str = "cannot be blank";

/// Request fields whose JSON name differs from the Rust field name.
const WIRE_NAMES: [(&str, &str); 4] = [
    ("city_id", "cityID"),
    ("is_active", "isActive"),
    ("merchant_id", "merchantID"),
    ("parent_id", "parentID"),
];

/// Convert validation errors to AppError
///
/// The first failure in path order is reported, e.g. `merchantID: cannot be
/// blank` or `city.name: cannot be blank` for a nested section.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut failures = Vec::new();
    collect(&errors, "", &mut failures);
    failures.sort();

    let message = failures
        .into_iter()
        .next()
        .map(|(path, message)| format!("{}: {}", path, message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}

/// Flatten `errors` into `(path, message)` pairs, descending into nested
/// structs (`city.name`) and list items (`periods[0].day`).
fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = format!("{}{}", prefix, wire_name(field));
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (path.clone(), message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect(nested, &format!("{}.", path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}].", path, index), out);
                }
            }
        }
    }
}

fn wire_name(field: &str) -> &str {
    WIRE_NAMES
        .iter()
        .find(|(rust, _)| *rust == field)
        .map(|(_, wire)| *wire)
        .unwrap_or(field)
}

/// Rejects whitespace-only values for optional patch fields.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(BLANK.into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "cannot be blank"))]
        name: String,
        #[validate(length(min = 1, message = "cannot be blank"))]
        address: String,
    }

    #[test]
    fn test_first_blank_field_is_reported() {
        let sample = Sample {
            name: String::new(),
            address: String::new(),
        };
        let err = validation_error(sample.validate().unwrap_err());
        assert_eq!(err.to_string(), "Validation error: address: cannot be blank");
    }

    #[derive(Validate)]
    struct Section {
        #[validate(custom(function = "not_blank"))]
        name: Option<String>,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(custom(function = "not_blank"))]
        merchant_id: Option<String>,
        #[validate(nested)]
        city: Option<Section>,
    }

    #[test]
    fn test_nested_field_is_reported_with_its_path() {
        let outer = Outer {
            merchant_id: None,
            city: Some(Section {
                name: Some("  ".into()),
            }),
        };
        let err = validation_error(outer.validate().unwrap_err());
        assert_eq!(err.to_string(), "Validation error: city.name: cannot be blank");
    }

    #[test]
    fn test_renamed_field_uses_json_name() {
        let outer = Outer {
            merchant_id: Some(String::new()),
            city: None,
        };
        let err = validation_error(outer.validate().unwrap_err());
        assert_eq!(err.to_string(), "Validation error: merchantID: cannot be blank");
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        assert!(not_blank("  ").is_err());
        assert!(not_blank("Milk").is_ok());
    }
}
