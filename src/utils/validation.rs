use crate::types::ApiResponse;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = match prefix.is_empty() {
            true => field.to_string(),
            false => format!("{}.{}", prefix, field),
        };

        match kind {
            ValidationErrorsKind::Field(errs) => out.extend(errs.iter().map(|err| {
                let message = match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", path),
                };
                (path.clone(), message)
            })),
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Flattens validator output into the user-facing messages of the envelope's
/// `errors` list, sorted by field path so responses are stable.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut collected = vec![];
    collect(errors, "", &mut collected);
    collected.sort_by(|a, b| a.0.cmp(&b.0));

    collected.into_iter().map(|(_, message)| message).collect()
}

pub fn into_response(errors: ValidationErrors) -> ApiResponse {
    ApiResponse::invalid(messages(&errors))
}

pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    match long_enough && has_upper && has_lower && has_digit {
        true => Ok(()),
        false => Err(ValidationError::new("WEAK_PASSWORD").with_message(Cow::from(
            "Password must be at least 8 characters and contain an uppercase letter, a lowercase letter and a digit",
        ))),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        false => Ok(()),
        true => Err(ValidationError::new("BLANK").with_message(Cow::from("Value must not be blank"))),
    }
}

const CONTACT_NUMBER_PATTERN: &str = r"^\+?[0-9][0-9 -]{5,19}$";

pub fn validate_contact_number(value: &str) -> Result<(), ValidationError> {
    match Regex::new(CONTACT_NUMBER_PATTERN) {
        Ok(regex) if regex.is_match(value.trim()) => Ok(()),
        _ => Err(ValidationError::new("INVALID_CONTACT_NUMBER")
            .with_message(Cow::from("Contact number must be 6 to 20 digits"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct SignUp {
        #[validate(email(message = "Email address is invalid"))]
        email: String,
        #[validate(custom(function = "validate_password_strength"))]
        password: String,
    }

    #[test]
    fn collects_every_failing_field() {
        let errors = SignUp {
            email: "not-an-email".into(),
            password: "short".into(),
        }
        .validate()
        .unwrap_err();

        let messages = messages(&errors);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "Email address is invalid");
        assert!(messages[1].starts_with("Password must be at least 8 characters"));
    }

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1))]
        name: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn nested_errors_are_flattened() {
        let errors = Outer {
            inner: Inner { name: String::new() },
        }
        .validate()
        .unwrap_err();

        assert_eq!(messages(&errors), vec!["inner.name is invalid".to_string()]);
    }

    #[test]
    fn password_strength_rules() {
        assert!(validate_password_strength("Sunset2024").is_ok());
        assert!(validate_password_strength("sunset2024").is_err());
        assert!(validate_password_strength("SUNSET2024").is_err());
        assert!(validate_password_strength("Sunsetting").is_err());
        assert!(validate_password_strength("Sun2").is_err());
    }

    #[test]
    fn contact_numbers() {
        assert!(validate_contact_number("+63 917 555 0142").is_ok());
        assert!(validate_contact_number("0917-555-0142").is_ok());
        assert!(validate_contact_number("call me").is_err());
        assert!(validate_contact_number("12").is_err());
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("Isaw").is_ok());
    }
}
