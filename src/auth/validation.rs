use serde::{Deserialize, Serialize};

pub const MSG_FILL_ALL: &str = "Please fill in all fields.";
pub const MSG_FILL_BOTH: &str = "Please fill in both fields.";
pub const MSG_BAD_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// A message shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Form validation
// ============================================================================

/// Empty fields are reported first; format and match checks only run once
/// every field has a value.
pub fn validate_registration(form: &RegistrationForm) -> Vec<FieldError> {
    let fields = [
        (Field::Username, &form.username),
        (Field::Email, &form.email),
        (Field::Password, &form.password),
        (Field::ConfirmPassword, &form.confirm_password),
    ];

    let empty: Vec<FieldError> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| FieldError::new(*field, MSG_FILL_ALL))
        .collect();
    if !empty.is_empty() {
        return empty;
    }

    let mut errors = Vec::new();
    if !is_valid_email(&form.email) {
        errors.push(FieldError::new(Field::Email, MSG_BAD_EMAIL));
    }
    if form.password != form.confirm_password {
        errors.push(FieldError::new(Field::ConfirmPassword, MSG_PASSWORD_MISMATCH));
    }
    errors
}

pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    [(Field::Email, &form.email), (Field::Password, &form.password)]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| FieldError::new(*field, MSG_FILL_BOTH))
        .collect()
}

/// Shape check only: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
