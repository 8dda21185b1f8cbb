use std::io::{BufRead, Write};

use crate::auth::credentials::CredentialStore;
use crate::auth::error::AuthError;
use crate::auth::flow::{login, register};
use crate::auth::validation::{LoginForm, RegistrationForm};
use crate::directory::loader::LoadOutcome;
use crate::directory::source::HospitalSource;
use crate::navigation::route::Navigator;
use crate::report::console::{format_card, format_home_screen};
use crate::screen::home::HomeScreen;
use crate::storage::error::StorageResult;
use crate::storage::kv::{FileStorage, KeyValueStorage};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{ActivityKind, TraceEvent};
use crate::viewed::persistence::KvViewedPersistence;
use crate::viewed::store::ViewTrackingStore;

// ============================================================================
// Session startup
// ============================================================================

/// Open device storage and rehydrate the viewed store from it.
pub fn open_session(data_dir: &str, tracer: &TraceLogger) -> StorageResult<(FileStorage, ViewTrackingStore)> {
    let storage = FileStorage::open(data_dir)?;
    let store = start_store(storage.clone(), tracer);
    Ok((storage, store))
}

/// Rehydrate a store over any storage backend.
pub fn start_store<S>(storage: S, tracer: &TraceLogger) -> ViewTrackingStore
where
    S: KeyValueStorage + Send + 'static,
{
    let store = ViewTrackingStore::rehydrate(Box::new(KvViewedPersistence::new(storage)));
    tracer.log(
        &TraceEvent::now(ActivityKind::SessionStarted)
            .with_viewed_count(store.viewed_count())
            .with_detail(format!("discarded {} from previous run", store.restored_count())),
    );
    store
}

/// Mount the home screen and journal how the load went.
pub fn mount_home(source: Box<dyn HospitalSource>, tracer: &TraceLogger) -> HomeScreen {
    let screen = HomeScreen::mount(source);
    let event = match screen.outcome() {
        Some(LoadOutcome::Ready(hospitals)) => {
            TraceEvent::now(ActivityKind::ListLoaded).with_detail(format!("{} hospitals", hospitals.len()))
        }
        Some(LoadOutcome::Failed(reason)) => TraceEvent::now(ActivityKind::ListFailed).with_detail(reason),
        None => TraceEvent::now(ActivityKind::ListFailed).with_detail("no outcome"),
    };
    tracer.log(&event);
    screen
}

// ============================================================================
// list subcommand
// ============================================================================

pub fn cmd_list(
    source: Box<dyn HospitalSource>,
    store: &ViewTrackingStore,
    query: Option<&str>,
    tracer: &TraceLogger,
) -> String {
    let mut screen = mount_home(source, tracer);
    if let Some(q) = query {
        screen.set_query(q);
        tracer.log(&TraceEvent::now(ActivityKind::Searched).with_query(q));
    }
    format_home_screen(&screen, store)
}

// ============================================================================
// browse subcommand
// ============================================================================

/// One line of input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    List,
    Search(String),
    View(String),
    Refresh,
    Count,
    Help,
    Quit,
}

/// Parse a browse line. Blank lines and unknown commands give `None`.
pub fn parse_browse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "list" | "ls" => Some(BrowseCommand::List),
        // `search` with no argument clears the filter.
        "search" | "find" => Some(BrowseCommand::Search(rest.to_string())),
        "view" if !rest.is_empty() => Some(BrowseCommand::View(rest.to_string())),
        "refresh" => Some(BrowseCommand::Refresh),
        "count" => Some(BrowseCommand::Count),
        "help" | "?" => Some(BrowseCommand::Help),
        "quit" | "exit" | "q" => Some(BrowseCommand::Quit),
        _ => None,
    }
}

const BROWSE_HELP: &str = "\
Commands:
  list              show the (filtered) directory
  search <text>     filter by name or address; `search` alone clears it
  view <id>         mark a hospital as viewed
  refresh           forget every viewed hospital
  count             show the viewed counter
  quit              leave the session
";

/// Drive a browse session until `quit` or end of input.
pub fn run_browse<R: BufRead, W: Write>(
    screen: &mut HomeScreen,
    store: &mut ViewTrackingStore,
    tracer: &TraceLogger,
    input: R,
    output: &mut W,
) -> std::io::Result<()> {
    write!(output, "{}", format_home_screen(screen, store))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_browse_command(&line) else {
            writeln!(output, "Unknown command: {} (try `help`)", line.trim())?;
            continue;
        };

        match command {
            BrowseCommand::List => write!(output, "{}", format_home_screen(screen, store))?,
            BrowseCommand::Search(query) => {
                screen.set_query(&query);
                tracer.log(&TraceEvent::now(ActivityKind::Searched).with_query(&query));
                write!(output, "{}", format_home_screen(screen, store))?;
            }
            BrowseCommand::View(id) => match screen.find(&id).cloned() {
                Some(hospital) => {
                    if screen.press_view(&id, store) {
                        tracer.log(
                            &TraceEvent::now(ActivityKind::Viewed)
                                .with_hospital(&id)
                                .with_viewed_count(store.viewed_count()),
                        );
                    }
                    let card = screen
                        .cards(store)
                        .into_iter()
                        .find(|c| c.id == hospital.id);
                    if let Some(card) = card {
                        write!(output, "{}", format_card(&card))?;
                    } else {
                        // Viewed but hidden by the current search filter.
                        writeln!(output, "Viewed {}", hospital.name)?;
                    }
                    writeln!(output, "{}", screen.viewed_label(store))?;
                }
                None => writeln!(output, "No hospital with id {}", id)?,
            },
            BrowseCommand::Refresh => {
                screen.refresh(store);
                tracer.log(&TraceEvent::now(ActivityKind::Cleared).with_viewed_count(0));
                writeln!(output, "{}", screen.viewed_label(store))?;
            }
            BrowseCommand::Count => writeln!(output, "{}", screen.viewed_label(store))?,
            BrowseCommand::Help => write!(output, "{}", BROWSE_HELP)?,
            BrowseCommand::Quit => break,
        }
    }

    Ok(())
}

// ============================================================================
// register / login subcommands
// ============================================================================

pub fn cmd_register<S: KeyValueStorage>(
    form: &RegistrationForm,
    storage: S,
    navigator: &mut Navigator,
    tracer: &TraceLogger,
) -> Result<String, AuthError> {
    let credentials = CredentialStore::new(storage);
    register(form, &credentials, navigator)?;
    tracer.log(&TraceEvent::now(ActivityKind::Registered).with_detail(&form.username));
    Ok("Registration Successful: You have successfully registered!".to_string())
}

pub fn cmd_login<S: KeyValueStorage>(
    form: &LoginForm,
    storage: S,
    navigator: &mut Navigator,
    tracer: &TraceLogger,
) -> Result<String, AuthError> {
    let credentials = CredentialStore::new(storage);
    match login(form, &credentials, navigator) {
        Ok(username) => {
            tracer.log(&TraceEvent::now(ActivityKind::LoggedIn).with_detail(&username));
            Ok(format!("Welcome, {}!", username))
        }
        Err(e) => {
            if e == AuthError::InvalidCredentials {
                tracer.log(&TraceEvent::now(ActivityKind::LoginRejected));
            }
            Err(e)
        }
    }
}

/// Render an auth error the way the forms show it: one line per field.
pub fn format_auth_error(error: &AuthError) -> String {
    match error {
        AuthError::Validation(errors) => errors
            .iter()
            .map(|e| format!("{:?}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("\n"),
        AuthError::InvalidCredentials => error.to_string(),
    }
}
