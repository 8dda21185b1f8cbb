use hospital_directory::auth::credentials::{CREDENTIALS_STORAGE_KEY, CredentialStore, Credentials};
use hospital_directory::auth::error::AuthError;
use hospital_directory::auth::flow::{login, register};
use hospital_directory::auth::validation::{
    Field, LoginForm, MSG_BAD_EMAIL, MSG_FILL_ALL, MSG_FILL_BOTH, MSG_PASSWORD_MISMATCH,
    RegistrationForm, validate_login, validate_registration,
};
use hospital_directory::navigation::route::{Navigator, Route};
use hospital_directory::storage::kv::{KeyValueStorage, MemoryStorage};

fn registration(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
    RegistrationForm {
        username: username.into(),
        email: email.into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.into(),
        password: password.into(),
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn registration_requires_every_field() {
    let errors = validate_registration(&registration("", "jane@example.com", "", "pw"));

    let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Username, Field::Password]);
    assert!(errors.iter().all(|e| e.message == MSG_FILL_ALL));
}

#[test]
fn registration_flags_password_mismatch_on_confirm_field() {
    let errors = validate_registration(&registration("jane", "jane@example.com", "pw1", "pw2"));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::ConfirmPassword);
    assert_eq!(errors[0].message, MSG_PASSWORD_MISMATCH);
}

#[test]
fn registration_flags_malformed_email() {
    let errors = validate_registration(&registration("jane", "jane.example.com", "pw", "pw"));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Email);
    assert_eq!(errors[0].message, MSG_BAD_EMAIL);
}

#[test]
fn registration_reports_format_and_mismatch_together() {
    let errors = validate_registration(&registration("jane", "nope", "a", "b"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn valid_registration_has_no_errors() {
    assert!(validate_registration(&registration("jane", "jane@example.com", "pw", "pw")).is_empty());
}

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(&login_form("", ""));
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.message == MSG_FILL_BOTH));
}

#[test]
fn validation_error_message_deduplicates() {
    let error = AuthError::Validation(validate_login(&login_form("", "")));
    assert_eq!(error.to_string(), MSG_FILL_BOTH);
    assert_eq!(error.field_errors().len(), 2);
}

// ============================================================================
// Register / login flows
// ============================================================================

#[test]
fn register_then_login_succeeds() {
    let storage = MemoryStorage::new();
    let credentials = CredentialStore::new(storage.clone());
    let mut nav = Navigator::new();

    register(
        &registration("jane", "jane@example.com", "s3cret", "s3cret"),
        &credentials,
        &mut nav,
    )
    .unwrap();
    assert_eq!(nav.current(), &Route::Login);

    let user = login(&login_form("jane@example.com", "s3cret"), &credentials, &mut nav).unwrap();

    assert_eq!(user, "jane");
    assert_eq!(
        nav.current(),
        &Route::Home {
            user: Some("jane".into())
        }
    );
}

#[test]
fn wrong_password_is_a_generic_invalid_outcome() {
    let storage = MemoryStorage::new();
    let credentials = CredentialStore::new(storage);
    let mut nav = Navigator::new();
    register(
        &registration("jane", "jane@example.com", "s3cret", "s3cret"),
        &credentials,
        &mut nav,
    )
    .unwrap();

    let err = login(&login_form("jane@example.com", "wrong"), &credentials, &mut nav).unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(err.field_errors().is_empty(), "Not field-specific");
    assert_eq!(nav.current(), &Route::Login, "Stays on login");
}

#[test]
fn unknown_email_is_the_same_invalid_outcome() {
    let credentials = CredentialStore::new(MemoryStorage::new());
    let mut nav = Navigator::new();
    register(&registration("jane", "jane@example.com", "pw", "pw"), &credentials, &mut nav).unwrap();

    let err = login(&login_form("john@example.com", "pw"), &credentials, &mut nav).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn login_without_any_registration_is_invalid() {
    let credentials = CredentialStore::new(MemoryStorage::new());
    let mut nav = Navigator::new();

    let err = login(&login_form("jane@example.com", "pw"), &credentials, &mut nav).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn registration_overwrites_previous_account() {
    let credentials = CredentialStore::new(MemoryStorage::new());
    let mut nav = Navigator::new();
    register(&registration("jane", "jane@example.com", "pw", "pw"), &credentials, &mut nav).unwrap();
    register(&registration("john", "john@example.com", "pw2", "pw2"), &credentials, &mut nav).unwrap();

    assert!(login(&login_form("jane@example.com", "pw"), &credentials, &mut nav).is_err());
    assert_eq!(
        login(&login_form("john@example.com", "pw2"), &credentials, &mut nav).unwrap(),
        "john"
    );
}

#[test]
fn invalid_registration_stores_nothing_and_stays_put() {
    let storage = MemoryStorage::new();
    let credentials = CredentialStore::new(storage.clone());
    let mut nav = Navigator::new();
    nav.replace(Route::Register);

    let err = register(&registration("jane", "jane@example.com", "a", "b"), &credentials, &mut nav)
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert!(storage.is_empty());
    assert_eq!(nav.current(), &Route::Register);
}

#[test]
fn storage_failure_during_registration_is_not_surfaced() {
    let storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let credentials = CredentialStore::new(storage.clone());
    let mut nav = Navigator::new();

    let result = register(&registration("jane", "jane@example.com", "pw", "pw"), &credentials, &mut nav);

    assert!(result.is_ok());
    assert_eq!(nav.current(), &Route::Login);
    assert!(credentials.load().unwrap().is_none());
}

#[test]
fn credentials_are_stored_as_plain_json() {
    let storage = MemoryStorage::new();
    let credentials = CredentialStore::new(storage.clone());
    credentials
        .save(&Credentials {
            username: "jane".into(),
            email: "jane@example.com".into(),
            password: "pw".into(),
        })
        .unwrap();

    let raw = storage.get_item(CREDENTIALS_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"username":"jane","email":"jane@example.com","password":"pw"}"#);

    credentials.clear().unwrap();
    assert!(credentials.load().unwrap().is_none());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn routes_round_trip_through_name_and_param() {
    let routes = [
        Route::Index,
        Route::Login,
        Route::Register,
        Route::Home { user: None },
        Route::Home {
            user: Some("jane".into()),
        },
    ];
    for route in routes {
        assert_eq!(Route::parse(route.name(), route.param()), Some(route.clone()));
    }
}

#[test]
fn unknown_routes_and_stray_params_are_rejected() {
    assert_eq!(Route::parse("settings", None), None);
    assert_eq!(Route::parse("login", Some("jane")), None);
}

#[test]
fn navigator_starts_on_landing_and_moves_to_login() {
    let mut nav = Navigator::new();
    assert_eq!(nav.current(), &Route::Index);
    nav.leave_landing();
    assert_eq!(nav.current(), &Route::Login);

    nav.replace(Route::Register);
    nav.leave_landing();
    assert_eq!(nav.current(), &Route::Register, "Only leaves the landing page");
}
