//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `locus settings [--telemetry]` | Effective settings as JSON |
//! | `locus components` | Registered identifiers and descriptions |
//! | `locus resolve <SETTING>...` | Resolve named extension points |
//! | `locus check` | Resolve every extension point |

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locus_domain::{Setting, Settings};
use locus_infrastructure::logging::init_logging;
use locus_infrastructure::{AppContext, ConfigLoader, init_app};
use serde_json::{Map, Value};
use tracing::{debug, error, info};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "locus")]
#[command(about = "Configuration-driven component locator")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective settings as JSON
    Settings {
        /// Print only the telemetry-safe subset
        #[arg(long)]
        telemetry: bool,
    },
    /// List registered components
    Components,
    /// Resolve extension points by option name
    Resolve {
        /// Option names, e.g. database_implementation
        #[arg(required = true)]
        settings: Vec<String>,
    },
    /// Resolve every extension point, failing on the first error
    Check,
}

/// Load configuration, start logging and dispatch the subcommand
pub fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let context = init_app(config)?;
    debug!(command = ?cli.command, "Dispatching command");
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Settings { telemetry } => print_settings(&mut out, context.settings(), telemetry),
        Command::Components => print_components(&mut out, &context),
        Command::Resolve { settings } => resolve(&mut out, &context, &settings),
        Command::Check => check(&mut out, &context),
    }
}

/// Effective settings with legacy identifiers rewritten
pub fn settings_json(settings: &Settings, telemetry: bool) -> Result<Value> {
    if telemetry {
        return Ok(serde_json::to_value(settings.telemetry_context())?);
    }
    let mut map = Map::new();
    for setting in Setting::ALL {
        map.insert(
            setting.as_str().to_string(),
            serde_json::to_value(settings.get(setting))?,
        );
    }
    Ok(Value::Object(map))
}

fn print_settings(out: &mut impl Write, settings: &Settings, telemetry: bool) -> Result<()> {
    let json = settings_json(settings, telemetry)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

fn print_components(out: &mut impl Write, context: &AppContext) -> Result<()> {
    for (identifier, description) in context.locator().registry().list() {
        writeln!(out, "{identifier}\t{description}")?;
    }
    Ok(())
}

fn resolve(out: &mut impl Write, context: &AppContext, names: &[String]) -> Result<()> {
    for name in names {
        let setting: Setting = name.parse()?;
        let (identifier, component) = context
            .locator()
            .resolve_identified(context.settings(), setting)
            .with_context(|| format!("Failed to resolve '{setting}'"))?;
        writeln!(out, "{setting} -> {identifier} ({})", component.component_name())?;
    }
    Ok(())
}

fn check(out: &mut impl Write, context: &AppContext) -> Result<()> {
    for setting in Setting::extension_points() {
        let (identifier, _) = context
            .locator()
            .resolve_identified(context.settings(), setting)
            .inspect_err(|e| error!(setting = %setting, error = %e, "Extension point check failed"))
            .with_context(|| format!("Extension point '{setting}' failed"))?;
        writeln!(out, "ok {setting} -> {identifier}")?;
    }
    let constructed = context.locator().len();
    info!(constructed, "All extension points resolved");
    writeln!(out, "{constructed} components constructed")?;
    Ok(())
}
