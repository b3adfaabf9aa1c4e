//! Command-line parsing and dispatch for the settings tool.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use moneymachine_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

use crate::commands::preferences::{handle_set, handle_show};
use crate::commands::sections::{handle_section, handle_sections};
use crate::context::{AppContext, CliError, CliResult};

const DEFAULT_STORE_PATH: &str = "moneymachine-settings.json";

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dispatch(cli, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

pub(crate) fn dispatch(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let ctx = AppContext::open(&cli.store)?;
    match cli.command {
        Command::Show => handle_show(&ctx, cli.output, out),
        Command::Set(set) => handle_set(&ctx, set, cli.output, out),
        Command::Section(args) => handle_section(&ctx, args, cli.output, out),
        Command::Sections => handle_sections(&ctx, cli.output, out),
    }
}

#[derive(Parser)]
#[command(
    name = "moneymachine",
    version,
    about = "Inspect and change Moneymachine POS settings"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "MONEYMACHINE_STORE",
        default_value = DEFAULT_STORE_PATH,
        help = "Settings file shared with other tools"
    )]
    pub(crate) store: PathBuf,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "MONEYMACHINE_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, value_parser = parse_log_format)]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the preferences and the active section.
    Show,
    /// Change one preference.
    #[command(subcommand)]
    Set(SetCommand),
    /// Print or change the active settings section.
    Section(SectionArgs),
    /// List every settings section.
    Sections,
}

#[derive(Subcommand)]
pub(crate) enum SetCommand {
    /// `dark` or `light`.
    Theme(ValueArgs),
    /// `en`, `es`, `fr`, or `de`.
    Language(ValueArgs),
    /// ISO currency code.
    Currency(ValueArgs),
    /// Percentage; non-numeric input stores zero.
    TaxRate(ValueArgs),
}

#[derive(Args)]
pub(crate) struct ValueArgs {
    #[arg(allow_hyphen_values = true)]
    pub(crate) value: String,
}

#[derive(Args)]
pub(crate) struct SectionArgs {
    /// Section id to select; omit to print the current one.
    pub(crate) id: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse().map_err(|err: anyhow::Error| err.to_string())
}

pub(crate) fn write_line(out: &mut dyn Write, line: &str) -> CliResult<()> {
    writeln!(out, "{line}").map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}
