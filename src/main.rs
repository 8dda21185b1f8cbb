use std::io::{self, Write};

use clap::Parser;
use hospital_directory::auth::validation::{LoginForm, RegistrationForm};
use hospital_directory::cli::commands::{
    cmd_list, cmd_login, cmd_register, format_auth_error, mount_home, open_session, run_browse,
};
use hospital_directory::cli::config::{Cli, Commands, build_source, load_config, resolve_data_dir};
use hospital_directory::navigation::route::Navigator;
use hospital_directory::storage::kv::FileStorage;
use hospital_directory::trace::logger::TraceLogger;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "hospital_directory=warn",
        1 => "hospital_directory=info",
        2 => "hospital_directory=debug",
        _ => "hospital_directory=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config(cli.config.as_deref());
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &config);
    let tracer = match config.trace.file.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let mut navigator = Navigator::new();
    navigator.leave_landing();

    match cli.command {
        Commands::List { query } => {
            let (_storage, store) = open_session(&data_dir, &tracer)?;
            let source = build_source(cli.endpoint.as_deref(), &config.api)?;
            print!("{}", cmd_list(source, &store, query.as_deref(), &tracer));
        }
        Commands::Browse => {
            let (_storage, mut store) = open_session(&data_dir, &tracer)?;
            let source = build_source(cli.endpoint.as_deref(), &config.api)?;
            let mut screen = mount_home(source, &tracer);

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_browse(&mut screen, &mut store, &tracer, stdin.lock(), &mut stdout)?;
            stdout.flush()?;
        }
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let storage = FileStorage::open(&data_dir)?;
            let form = RegistrationForm {
                username,
                email,
                password,
                confirm_password,
            };
            match cmd_register(&form, storage, &mut navigator, &tracer) {
                Ok(message) => println!("{}", message),
                Err(e) => {
                    eprintln!("{}", format_auth_error(&e));
                    tracer.flush();
                    std::process::exit(1);
                }
            }
        }
        Commands::Login { email, password } => {
            let storage = FileStorage::open(&data_dir)?;
            let form = LoginForm { email, password };
            match cmd_login(&form, storage, &mut navigator, &tracer) {
                Ok(message) => println!("{}", message),
                Err(e) => {
                    eprintln!("{}", format_auth_error(&e));
                    tracer.flush();
                    std::process::exit(1);
                }
            }
        }
    }

    tracing::debug!(route = navigator.current().name(), "exiting");
    Ok(())
}
