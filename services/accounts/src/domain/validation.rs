//! Field-level validation for registration and profile updates.

/// A single failed validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Capability for validating one input field. Validators are plain values
/// so rule sets can be composed per operation.
pub trait FieldValidator {
    fn field(&self) -> &'static str;
    fn validate(&self, value: &str) -> Vec<FieldError>;
}

/// Login: 6 to 254 chars, ASCII alphanumerics plus at most one underscore.
pub struct LoginValidator;

impl FieldValidator for LoginValidator {
    fn field(&self) -> &'static str {
        "login"
    }

    fn validate(&self, value: &str) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let len = value.chars().count();
        if !(6..=254).contains(&len) {
            errors.push(FieldError {
                field: self.field(),
                message: "must be between 6 and 254 characters".into(),
            });
        }
        let underscores = value.chars().filter(|c| *c == '_').count();
        let valid_chars = value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_chars || underscores > 1 {
            errors.push(FieldError {
                field: self.field(),
                message: "only digits, latin letters and a single underscore are allowed".into(),
            });
        }
        errors
    }
}

/// First or last name: letters only, 3 to 99 chars.
pub struct PersonNameValidator {
    pub field: &'static str,
}

impl FieldValidator for PersonNameValidator {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, value: &str) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let len = value.chars().count();
        if !(3..=99).contains(&len) {
            errors.push(FieldError {
                field: self.field,
                message: "must be between 3 and 99 characters".into(),
            });
        }
        if !value.chars().all(char::is_alphabetic) {
            errors.push(FieldError {
                field: self.field,
                message: "only letters are allowed".into(),
            });
        }
        errors
    }
}

/// Email shape check: one `@`, non-empty local part, dotted domain with an
/// alphabetic top-level domain of at least two characters.
pub struct EmailValidator;

impl FieldValidator for EmailValidator {
    fn field(&self) -> &'static str {
        "email"
    }

    fn validate(&self, value: &str) -> Vec<FieldError> {
        let invalid = || {
            vec![FieldError {
                field: self.field(),
                message: "must be a valid email address".into(),
            }]
        };

        let Some((local, domain)) = value.split_once('@') else {
            return invalid();
        };
        if local.is_empty() || local.contains('@') || value.chars().any(char::is_whitespace) {
            return invalid();
        }
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return invalid();
        };
        if host.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return invalid();
        }
        Vec::new()
    }
}

/// Run every registration-field validator and collect all failures.
pub fn validate_registration(
    login: &str,
    firstname: &str,
    lastname: &str,
    email: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    errors.extend(LoginValidator.validate(login));
    errors.extend(PersonNameValidator { field: "firstname" }.validate(firstname));
    errors.extend(PersonNameValidator { field: "lastname" }.validate(lastname));
    errors.extend(EmailValidator.validate(email));
    errors
}
