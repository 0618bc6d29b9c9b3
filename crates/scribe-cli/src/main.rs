use anyhow::Result;
use clap::{Parser, Subcommand};
use scribe_core::config::DEFAULT_LOG_LEVEL;
use scribe_infrastructure::{ConfigService, ScribePaths};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "scribe")]
#[command(about = "Scribe CLI - profile settings and post editor", long_about = None)]
struct Cli {
    /// Work against a local in-memory account instead of the server
    #[arg(long, global = true)]
    offline: bool,

    /// Use this directory instead of the platform config directory
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and update account settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Manage the client configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Post editor helpers
    Editor {
        #[command(subcommand)]
        action: EditorAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Fetch the current settings and print them as JSON
    Show,
    /// Edit fields and submit only what changed
    Update {
        /// Field assignment such as `social.twitter=https://twitter.com/me`
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// List the editable field names
    Fields,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[derive(Subcommand)]
enum EditorAction {
    /// List the formatting toolbar
    Toolbar,
    /// Build a draft and print it as JSON
    Draft {
        #[arg(long)]
        title: String,
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_service = ConfigService::new(ScribePaths::new(cli.config_dir));

    // A broken config file must not stop `config path` or `config init`.
    let log_level = config_service
        .get_config()
        .map(|config| config.log.level)
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    commands::utils::init_logging(&log_level);

    match cli.command {
        Commands::Settings { action } => {
            let api = commands::utils::build_api(&config_service, cli.offline)?;
            match action {
                SettingsAction::Show => commands::settings::show(api).await?,
                SettingsAction::Update { assignments } => {
                    commands::settings::update(api, &assignments).await?
                }
                SettingsAction::Fields => commands::settings::fields(),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init(&config_service)?,
            ConfigAction::Show => commands::config::show(&config_service)?,
            ConfigAction::Path => commands::config::path(&config_service)?,
        },
        Commands::Editor { action } => match action {
            EditorAction::Toolbar => commands::editor::toolbar(),
            EditorAction::Draft { title, tags } => commands::editor::draft(&title, &tags)?,
        },
    }

    Ok(())
}
