use crate::auth::credentials::{CredentialStore, Credentials};
use crate::auth::error::AuthError;
use crate::auth::validation::{LoginForm, RegistrationForm, validate_login, validate_registration};
use crate::navigation::route::{Navigator, Route};
use crate::storage::kv::KeyValueStorage;

/// Validate and store a registration, then send the user to the login
/// screen.
///
/// A failed write is logged only; the user still lands on login.
pub fn register<S: KeyValueStorage>(
    form: &RegistrationForm,
    store: &CredentialStore<S>,
    navigator: &mut Navigator,
) -> Result<(), AuthError> {
    let errors = validate_registration(form);
    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    let credentials = Credentials {
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    };
    if let Err(e) = store.save(&credentials) {
        tracing::error!("failed to store registration: {}", e);
    } else {
        tracing::info!(username = %credentials.username, "registered");
    }

    navigator.replace(Route::Login);
    Ok(())
}

/// Check the form against the stored account. On success the user goes to
/// the home screen and the username is returned.
///
/// Any mismatch, including no account at all, is the same generic
/// [`AuthError::InvalidCredentials`].
pub fn login<S: KeyValueStorage>(
    form: &LoginForm,
    store: &CredentialStore<S>,
    navigator: &mut Navigator,
) -> Result<String, AuthError> {
    let errors = validate_login(form);
    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    let stored = store.load().unwrap_or_else(|e| {
        tracing::error!("failed to read stored credentials: {}", e);
        None
    });

    match stored {
        Some(credentials) if credentials.matches(&form.email, &form.password) => {
            tracing::info!(username = %credentials.username, "login succeeded");
            navigator.replace(Route::Home {
                user: Some(credentials.username.clone()),
            });
            Ok(credentials.username)
        }
        _ => {
            tracing::info!("login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}
