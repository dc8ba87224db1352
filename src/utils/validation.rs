//! Shared validation rules.
//!
//! Create payloads use the `validator` built-ins directly. Sparse update
//! payloads carry [`Field`] values and go through the `*_field` rules below,
//! which only look at present values and reject an explicit `null` on fields
//! that cannot be cleared.

use crate::utils::field::Field;
use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use regex::Regex;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "status": StatusCode::BAD_REQUEST.as_u16(),
            "error": "Validation failed",
            "errors": errors,
        })),
    )
        .into_response()
}

fn error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

pub fn is_phone_number(phone: &str) -> bool {
    Regex::new(r"^\+\d{7,15}$")
        .map(|regex| regex.is_match(phone))
        .unwrap_or(false)
}

pub fn phone_number(phone: &str) -> Result<(), ValidationError> {
    match is_phone_number(phone) {
        true => Ok(()),
        false => Err(error(
            "INVALID_PHONE_NUMBER",
            "Phone number must be in international format (e.g: +234...)".to_string(),
        )),
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(error("REQUIRED", "Value must not be empty".to_string())),
        false => Ok(()),
    }
}

fn required<T>(field: &Field<T>) -> Result<Option<&T>, ValidationError> {
    match field {
        Field::Null => Err(error("REQUIRED", "Value cannot be null".to_string())),
        _ => Ok(field.as_value()),
    }
}

pub fn text_field(
    field: &Field<String>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let Some(value) = required(field)? else {
        return Ok(());
    };

    let length = value.chars().count();
    if length < min || length > max {
        let mut err = error(
            "length",
            format!("Value must be between {min} and {max} characters long"),
        );
        err.add_param(Cow::from("min"), &min);
        err.add_param(Cow::from("max"), &max);
        err.add_param(Cow::from("value"), value);
        return Err(err);
    }

    Ok(())
}

pub fn id_field(field: &Field<String>) -> Result<(), ValidationError> {
    required(field)?.map(|value| not_blank(value)).unwrap_or(Ok(()))
}

/// Like [`id_field`] but allows the reference to be cleared.
pub fn nullable_id_field(field: &Field<String>) -> Result<(), ValidationError> {
    field.as_value().map(|value| not_blank(value)).unwrap_or(Ok(()))
}

pub fn amount_field(field: &Field<f64>, min: f64) -> Result<(), ValidationError> {
    match required(field)? {
        Some(value) if !value.is_finite() || *value < min => {
            let mut err = error("range", format!("Value must be at least {min}"));
            err.add_param(Cow::from("min"), &min);
            err.add_param(Cow::from("value"), value);
            Err(err)
        }
        _ => Ok(()),
    }
}

pub fn count_field(field: &Field<i64>, min: i64, max: i64) -> Result<(), ValidationError> {
    match required(field)? {
        Some(value) if *value < min || *value > max => {
            let mut err = error("range", format!("Value must be between {min} and {max}"));
            err.add_param(Cow::from("min"), &min);
            err.add_param(Cow::from("max"), &max);
            err.add_param(Cow::from("value"), value);
            Err(err)
        }
        _ => Ok(()),
    }
}

pub fn present_field<T>(field: &Field<T>) -> Result<(), ValidationError> {
    required(field).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers_must_be_international() {
        assert!(is_phone_number("+2348012345678"));
        assert!(is_phone_number("+1234567"));
        assert!(!is_phone_number("08012345678"));
        assert!(!is_phone_number("+12345"));
        assert!(!is_phone_number("+1234567890123456"));
    }

    #[test]
    fn text_field_only_checks_present_values() {
        assert!(text_field(&Field::Unset, 2, 100).is_ok());
        assert!(text_field(&Field::Value("Rice".to_string()), 2, 100).is_ok());
        assert!(text_field(&Field::Value("R".to_string()), 2, 100).is_err());
        assert!(text_field(&Field::Null, 2, 100).is_err());
    }

    #[test]
    fn nullable_ids_accept_null_but_not_blank_strings() {
        assert!(nullable_id_field(&Field::Null).is_ok());
        assert!(nullable_id_field(&Field::Value(" ".to_string())).is_err());
        assert!(id_field(&Field::Null).is_err());
    }

    #[test]
    fn numeric_fields_respect_bounds() {
        assert!(amount_field(&Field::Value(0.0), 0.0).is_ok());
        assert!(amount_field(&Field::Value(-0.01), 0.0).is_err());
        assert!(amount_field(&Field::Value(f64::NAN), 0.0).is_err());
        assert!(count_field(&Field::Value(100), 1, 100).is_ok());
        assert!(count_field(&Field::Value(0), 1, 100).is_err());
    }
}
