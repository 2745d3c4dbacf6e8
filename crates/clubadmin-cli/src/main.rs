//! clubadmin - command-line admin console for the sports-club platform.
//!
//! Every protected command is resolved through the session guard first;
//! a signed-out user always lands on the sign-in entry point.

mod notifier;
mod render;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clubadmin_core::models::{NewClubAccount, PlanInput};
use clubadmin_core::{AdminApp, ApiError, Config, Route, SessionState};

use notifier::StderrNotifier;

#[derive(Parser, Debug)]
#[command(name = "clubadmin", version, about = "Admin console for the sports-club platform")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, env = "CLUBADMIN_BASE_URL")]
    base_url: Option<String>,

    /// Path to an alternative config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the token
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show the session state
    Status,
    /// Show where a navigation path lands
    Open { path: String },
    /// Aggregate statistics
    Dashboard,
    #[command(subcommand)]
    Clubs(ClubsCommand),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Sports(SportsCommand),
    #[command(subcommand)]
    Plans(PlansCommand),
    /// Paginated transaction history
    Transactions {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Follow the session until it ends or Ctrl+C
    Watch,
}

#[derive(Subcommand, Debug)]
enum ClubsCommand {
    List,
    /// Register a club manager account
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: String,
    },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List,
}

#[derive(Subcommand, Debug)]
enum SportsCommand {
    List,
    Add { name: String },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    /// Length in days
    #[arg(long)]
    duration: i64,
}

impl From<PlanArgs> for PlanInput {
    fn from(args: PlanArgs) -> Self {
        PlanInput {
            name: args.name,
            price: args.price,
            duration: args.duration,
        }
    }
}

#[derive(Subcommand, Debug)]
enum PlansCommand {
    List,
    Add(PlanArgs),
    Update {
        id: i64,
        #[command(flatten)]
        plan: PlanArgs,
    },
    Delete { id: i64 },
}

/// Initialize the tracing subscriber for logging
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let _log_guard = match init_tracing(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<(Config, PathBuf)> {
    let path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let mut config = Config::load_from(&path)?;
    config.apply_env();
    if let Some(ref url) = cli.base_url {
        config.base_url = url.clone();
    }
    Ok((config, path))
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let (config, config_path) = load_config(&cli)?;
    let app = AdminApp::from_config(config, Arc::new(StderrNotifier))?;
    info!(base_url = app.api.base_url(), "clubadmin starting");

    let json = cli.json;
    let code = match cli.command {
        Command::Login { email } => login(app, email, &config_path).await?,
        Command::Logout => {
            app.logout();
            ExitCode::SUCCESS
        }
        Command::Status => {
            let state = app.session_state();
            println!("session:  {}", state_label(state));
            println!("lands on: {}", app.navigate(Route::Home));
            println!("backend:  {}", app.api.base_url());
            ExitCode::SUCCESS
        }
        Command::Open { path } => {
            let requested = Route::from_path(&path);
            println!("{}", app.navigate(requested));
            ExitCode::SUCCESS
        }
        Command::Dashboard => {
            guarded(&app, Route::Home)?;
            emit(app.dashboard().await, json, render::dashboard)
        }
        Command::Clubs(ClubsCommand::List) => {
            guarded(&app, Route::Clubs)?;
            emit(app.clubs().await, json, |c| render::clubs(c))
        }
        Command::Clubs(ClubsCommand::Add { username, email, password, phone }) => {
            guarded(&app, Route::AddClub)?;
            let account = NewClubAccount::new(&username, &email, &password, &phone);
            done(app.add_club(&account).await)
        }
        Command::Users(UsersCommand::List) => {
            guarded(&app, Route::Users)?;
            emit(app.users().await, json, |u| render::users(u))
        }
        Command::Sports(cmd) => {
            guarded(&app, Route::Sports)?;
            match cmd {
                SportsCommand::List => emit(app.sports().await, json, |s| render::sports(s)),
                SportsCommand::Add { name } => done(app.add_sport(&name).await),
                SportsCommand::Delete { id } => done(app.delete_sport(id).await),
            }
        }
        Command::Plans(cmd) => {
            guarded(&app, Route::Plans)?;
            match cmd {
                PlansCommand::List => emit(app.plans().await, json, |p| render::plans(p)),
                PlansCommand::Add(args) => done(app.add_plan(&args.into()).await),
                PlansCommand::Update { id, plan } => done(app.update_plan(id, &plan.into()).await),
                PlansCommand::Delete { id } => done(app.delete_plan(id).await),
            }
        }
        Command::Transactions { page, limit } => {
            guarded(&app, Route::Transactions)?;
            emit(app.transactions(page, limit).await, json, |t| {
                render::transactions(t, page, limit)
            })
        }
        Command::Watch => watch(&app).await?,
    };
    Ok(code)
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `clubadmin login` first")]
    SignInRequired,
    #[error("email required")]
    MissingEmail,
}

fn guarded(app: &AdminApp, route: Route) -> Result<()> {
    match app.navigate(route) {
        Route::SignIn => Err(CliError::SignInRequired.into()),
        _ => Ok(()),
    }
}

/// Failures were already shown by the notifier; only the exit status is left.
fn emit<T: Serialize>(
    result: Result<Option<T>, ApiError>,
    json: bool,
    table: impl FnOnce(&T) -> String,
) -> ExitCode {
    match result {
        Ok(Some(value)) => {
            if json {
                match serde_json::to_string_pretty(&value) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", table(&value));
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn done<T>(result: Result<T, ApiError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn state_label(state: SessionState) -> &'static str {
    match state {
        SessionState::Authenticated => "signed in",
        SessionState::Unauthenticated => "signed out",
    }
}

async fn login(mut app: AdminApp, email: Option<String>, config_path: &Path) -> Result<ExitCode> {
    let email = match email.or_else(|| app.config.last_identifier.clone()) {
        Some(email) => email,
        None => prompt_email()?,
    };
    let password = rpassword::prompt_password(format!("Password for {}: ", email))?;

    if app.login(&email, &password).await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    app.config.last_identifier = Some(email);
    if let Err(e) = app.config.save_to(config_path) {
        warn!(error = %e, "Failed to save config");
    }
    Ok(ExitCode::SUCCESS)
}

fn prompt_email() -> Result<String> {
    use std::io::Write;

    print!("Email: ");
    io::stdout().flush()?;

    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(CliError::MissingEmail.into());
    }
    Ok(email)
}

async fn watch(app: &AdminApp) -> Result<ExitCode> {
    guarded(app, Route::Home)?;

    let mut rx = app.subscribe();
    let period = Duration::from_secs(app.config.watch_interval_secs.max(1));
    let watcher = app.guard.clone().spawn_watcher(period);
    println!("watching session ({}), Ctrl+C to stop", state_label(*rx.borrow()));

    let code = loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break ExitCode::SUCCESS;
                }
                let state = *rx.borrow_and_update();
                println!("session: {}", state_label(state));
                if state == SessionState::Unauthenticated {
                    println!("lands on: {}", app.navigate(Route::Home));
                    break ExitCode::SUCCESS;
                }
            }
            _ = tokio::signal::ctrl_c() => break ExitCode::SUCCESS,
        }
    };

    watcher.abort();
    Ok(code)
}
