//! Terminal front-end for the Printaway backend.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use printaway::workflow::SessionStore;
use printaway::{ApiClient, ClientConfig};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "printaway", version, about = "Print-shop order management")]
struct Cli {
    /// Backend base URL, overriding the config file.
    #[arg(long, env = "PRINTAWAY_API_URL", global = true)]
    api_url: Option<String>,

    /// Log filter, e.g. "printaway=debug".
    #[arg(long, env = "PRINTAWAY_LOG", global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a new print job
    Order(commands::order::OrderArgs),
    /// Look up a print job by reference code
    Status(commands::status::StatusArgs),
    /// Manage the job queue (staff)
    #[command(subcommand)]
    Jobs(commands::jobs::JobsCommand),
    /// Manage staff accounts (superadmin)
    #[command(subcommand)]
    Admins(commands::admins::AdminsCommand),
    /// Log in as staff
    Login(commands::auth::LoginArgs),
    /// Log out and discard the saved session
    Logout,
    /// Show the currently logged-in staff account
    Whoami,
}

fn init_tracing(filter: &str) -> Result<()> {
    LogTracer::init()?;
    let subscriber = fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn session_store() -> Result<SessionStore> {
    SessionStore::default_path()
        .map(SessionStore::new)
        .ok_or_else(|| anyhow::anyhow!("Could not determine the user config directory"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log)?;

    let mut config = ClientConfig::load_or_default()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    config.validate()?;

    tracing::debug!(base_url = %config.api_base_url, "Backend configured");
    let client = ApiClient::new(&config)?;
    let store = session_store()?;

    match cli.command {
        Command::Order(args) => commands::order::run(&client, args).await,
        Command::Status(args) => commands::status::run(&client, args).await,
        Command::Jobs(command) => commands::jobs::run(&client, &store, command).await,
        Command::Admins(command) => commands::admins::run(&client, &store, command).await,
        Command::Login(args) => commands::auth::login(&client, &store, args).await,
        Command::Logout => commands::auth::logout(&client, &store).await,
        Command::Whoami => commands::auth::whoami(&client, &store).await,
    }
}
