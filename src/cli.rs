use crate::commands;
use crate::common::CommonParams;
use crate::providers::Provider;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum, crate_version};
use colored::Colorize;
use std::path::PathBuf;

const LOG_FILE: &str = "lexiband-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "lexiband: AI-powered IELTS study-guide generator",
    long_about = "lexiband turns any English article into a four-part IELTS study guide: speaking idioms, core vocabulary, reading logic, and syntax analysis — with Chinese translations throughout.",
    disable_version_flag = true,
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, acknowledgments, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// One of the four study-guide sections
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Speaking,
    Vocab,
    Reading,
    Syntax,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze an article and generate a study guide
    #[command(
        about = "Analyze an English article using AI",
        long_about = "Send an English article (at least 50 characters) to the configured LLM provider and render the resulting four-section study guide. Reads from a file, or from stdin when no file is given.",
        after_help = get_dynamic_help()
    )]
    Analyze {
        #[command(flatten)]
        common: CommonParams,

        /// Path to the article; reads stdin when omitted
        #[arg(help = "Path to the article file; reads stdin when omitted")]
        file: Option<PathBuf>,

        /// Print the plain-text guide to stdout without saving it
        #[arg(short, long, help = "Print the plain-text guide to stdout and exit")]
        print: bool,
    },

    /// Re-render the last saved study guide
    #[command(about = "Show the last saved study guide")]
    Show {
        /// Limit output to one section
        #[arg(short, long, value_enum, help = "Limit output to one section")]
        section: Option<Section>,

        /// Copy the plain-text summary to the clipboard
        #[arg(short, long, help = "Copy the plain-text summary to the clipboard")]
        copy: bool,
    },

    /// Delete the saved study guide
    #[command(about = "Delete the saved study guide")]
    Clear,

    /// Configure providers, models, and API keys
    #[command(about = "Configure providers, models, and API keys")]
    Config {
        #[command(flatten)]
        common: CommonParams,

        /// Set the API key for the active provider
        #[arg(long, help = "Set the API key for the active provider")]
        api_key: Option<String>,

        /// Print the current configuration
        #[arg(short, long, help = "Print the current configuration")]
        list: bool,
    },
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help including available LLM providers
fn get_dynamic_help() -> String {
    let providers_list = Provider::ALL
        .iter()
        .map(|p| format!("{}", p.name().bold()))
        .collect::<Vec<_>>()
        .join(" • ");

    format!("\nAvailable LLM Providers: {providers_list}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
    } else {
        crate::logger::disable_logging();
    }

    // Set quiet mode in the UI module
    if cli.quiet {
        crate::ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["lexiband", "--help"]);
        Ok(())
    }
}

/// Dispatch a parsed subcommand to its handler
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            common,
            file,
            print,
        } => commands::handle_analyze_command(common, file, print).await,
        Commands::Show { section, copy } => commands::handle_show_command(section, copy),
        Commands::Clear => commands::handle_clear_command(),
        Commands::Config {
            common,
            api_key,
            list,
        } => commands::handle_config_command(&common, api_key, list),
    }
}
