use crate::auth::validation::FieldError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("{}", summarize(.0))]
    Validation(Vec<FieldError>),
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

impl AuthError {
    /// Field errors to render inline; empty for non-validation failures.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AuthError::Validation(errors) => errors,
            AuthError::InvalidCredentials => &[],
        }
    }
}

/// One line per distinct message, in field order.
fn summarize(errors: &[FieldError]) -> String {
    let mut messages: Vec<&str> = Vec::new();
    for error in errors {
        if !messages.contains(&error.message.as_str()) {
            messages.push(&error.message);
        }
    }
    messages.join(" ")
}
