pub mod id;
pub mod profile;
pub mod question;
pub mod user;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?~`";

#[derive(Debug, Validate, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(description = "At least 8 characters with an uppercase letter, a digit and a special character.")]
pub struct ValidPassword {
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(
            function = "has_uppercase_letter",
            message = "Password must contain at least one uppercase letter (A-Z)"
        ),
        custom(function = "has_digit", message = "Password must contain at least one digit (0-9)"),
        custom(
            function = "has_special_char",
            message = "Password must contain at least one special character (!@#$%^&* etc.)"
        )
    )]
    value: String,
}

impl ValidPassword {
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn require(ok: bool, code: &'static str) -> Result<(), ValidationError> {
    if ok { Ok(()) } else { Err(ValidationError::new(code)) }
}

fn has_uppercase_letter(password: &str) -> Result<(), ValidationError> {
    require(password.chars().any(|c| c.is_ascii_uppercase()), "password_no_uppercase")
}

fn has_digit(password: &str) -> Result<(), ValidationError> {
    require(password.chars().any(|c| c.is_ascii_digit()), "password_no_digit")
}

fn has_special_char(password: &str) -> Result<(), ValidationError> {
    require(
        password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
        "password_no_special_char",
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use validator::Validate;

    use crate::adapter::http::schema::ValidPassword;

    fn parse(password: &str) -> ValidPassword {
        serde_json::from_value(json!(password)).unwrap()
    }

    #[rstest]
    #[case("Password123!")]
    #[case("MyP@ssw0rd")]
    #[case("Pa0!Pass")]
    fn test_valid_password(#[case] password: &str) {
        let parsed = parse(password);
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.value(), password);
    }

    #[rstest]
    #[case("Pass1!", "length")]
    #[case("password123!", "password_no_uppercase")]
    #[case("Password!", "password_no_digit")]
    #[case("Password123", "password_no_special_char")]
    #[case("Пароль123!", "password_no_uppercase")]
    fn test_invalid_password(#[case] password: &str, #[case] code: &str) {
        let errors = parse(password).validate().unwrap_err();
        let codes: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter().map(|e| e.code.to_string()))
            .collect();
        assert!(codes.iter().any(|c| c == code), "`{}` should fail with {}: {:?}", password, code, codes);
    }
}
