//! graphdocs-ctl
//!
//! Generates AsciiDoc reference pages for a graph database from metadata the host
//! system already exposes: configuration settings and stored procedure listings.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "graphdocs-ctl",
    version,
    about = "Generate AsciiDoc reference documentation for settings and procedures",
    styles = output::clap_styles()
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the configuration settings reference
    Config(ConfigArgs),

    /// Generate the stored procedure reference
    Procedures(ProcedureArgs),

    /// Create a .graphdocs.toml with default preferences
    Init {
        /// Anchor prefix to write into the config
        #[arg(long, default_value = "config_")]
        id_prefix: String,

        /// Enable split HTML/non-HTML output in the config
        #[arg(long)]
        split: bool,
    },
}

#[derive(Debug, Args)]
pub(crate) struct ConfigArgs {
    /// TOML file describing the host's settings
    #[arg(short, long)]
    pub registry: PathBuf,

    /// Anchor id of the summary section
    #[arg(long, default_value = "configuration-settings")]
    pub id: String,

    /// Title of the summary section
    #[arg(long, default_value = "Configuration settings")]
    pub title: String,

    /// Prefix for setting anchors (defaults to the CLI config value)
    #[arg(long)]
    pub id_prefix: Option<String>,

    /// Emit HTML and non-HTML variants of each setting table
    #[arg(long)]
    pub split: bool,

    /// Include internal, unsupported settings
    #[arg(long)]
    pub include_internal: bool,

    /// Only document settings that can be changed at runtime
    #[arg(long)]
    pub dynamic_only: bool,

    /// Only document deprecated settings
    #[arg(long)]
    pub deprecated_only: bool,

    /// Only document settings whose name starts with this prefix
    #[arg(long)]
    pub name_prefix: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct ProcedureArgs {
    /// JSON procedure listing of the community edition
    #[arg(long)]
    pub community: PathBuf,

    /// JSON procedure listing of the enterprise edition
    #[arg(long)]
    pub enterprise: PathBuf,

    /// Anchor id of the table
    #[arg(long, default_value = "procedures-reference")]
    pub id: String,

    /// Title of the table
    #[arg(long, default_value = "Built-in procedures")]
    pub title: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("graphdocs_ctl={level},graphdocs_tooling={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cli_config = cli_config::load_cli_config();

    let result = match cli.command {
        Commands::Config(args) => commands::handle_config_command(args, &cli_config),
        Commands::Procedures(args) => commands::handle_procedures_command(args, &cli_config),
        Commands::Init { id_prefix, split } => commands::handle_init_command(&id_prefix, split),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}
