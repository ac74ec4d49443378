mod config;
mod logging;
mod output;
mod schema;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use config::{ConfigError, GeneratorConfig, ResolvedConfig};
use dsnforge_generate::{
    DsnWriter, FakerSource, GenerateOptions, GenerationEngine, GenerationError, LocaleKey,
    SourceOptions,
};
use logging::{LogFormat, init_logging};
use output::{write_atomic, write_json_atomic};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "dsnforge", version, about = "Synthetic DSN declaration generator")]
struct Cli {
    /// Log line format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a DSN file.
    Generate(GenerateArgs),
    /// Print the record types and their fields.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file with defaults for the flags below.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output path [default: dsn.txt].
    #[arg(long)]
    out: Option<PathBuf>,
    /// Number of individuals declared [default: 100].
    #[arg(long)]
    individuals: Option<u64>,
    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Reference "today" (YYYY-MM-DD) [default: current date].
    #[arg(long, value_name = "YYYY-MM-DD")]
    reference_date: Option<NaiveDate>,
    /// Faker locale: en_US or fr_FR [default: fr_FR].
    #[arg(long)]
    locale: Option<LocaleKey>,
    /// Add an activity block after each pay period.
    #[arg(long, default_value_t = false, conflicts_with = "no_activity")]
    with_activity: bool,
    /// Leave out activity blocks even if the config file enables them.
    #[arg(long, default_value_t = false)]
    no_activity: bool,
    /// Write a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

impl GenerateArgs {
    fn flags(&self) -> GeneratorConfig {
        GeneratorConfig {
            out: self.out.clone(),
            individuals: self.individuals,
            seed: self.seed,
            reference_date: self.reference_date,
            locale: self.locale,
            with_activity: match (self.with_activity, self.no_activity) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            },
            report: self.report.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Only show the record type with this section code.
    #[arg(long, value_name = "CODE")]
    section: Option<String>,
    /// Print as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format).map_err(CliError::Logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Schema(args) => run_schema(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let file = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let today = chrono::Local::now().date_naive();
    let config = args.flags().or(file).resolve(today);
    info!(
        out = %config.out.display(),
        individuals = config.individuals,
        locale = %config.locale,
        "configuration resolved"
    );

    let ResolvedConfig {
        out,
        individuals,
        seed,
        reference_date,
        locale,
        with_activity,
        report,
    } = config;

    let options = GenerateOptions {
        individuals,
        reference_date,
        with_activity,
    };
    let engine = GenerationEngine::new(options);
    let mut source = FakerSource::new(SourceOptions { seed, locale });

    let run_report = write_atomic(&out, |file| -> Result<_, CliError> {
        let mut writer = DsnWriter::new(file);
        let run_report = engine.run(&mut source, &mut writer)?;
        let file = writer.into_inner()?;
        Ok((run_report, file))
    })?;
    info!(
        path = %out.display(),
        seed = ?run_report.seed,
        bytes_written = run_report.bytes_written,
        "dsn written"
    );

    if let Some(report_path) = report {
        write_json_atomic(&report_path, &run_report)?;
        info!(path = %report_path.display(), "report written");
    }

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "{} ({} lines, seed {})",
        out.display(),
        run_report.lines,
        run_report
            .seed
            .map_or_else(|| "unknown".to_string(), |seed| seed.to_string())
    )?;
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let selected = schema::select(args.section.as_deref()).ok_or_else(|| {
        CliError::InvalidConfig(format!(
            "unknown section '{}'",
            args.section.as_deref().unwrap_or_default()
        ))
    })?;

    let mut stdout = io::stdout().lock();
    if args.json {
        schema::write_json(&mut stdout, &selected)?;
    } else {
        schema::write_text(&mut stdout, &selected)?;
    }
    Ok(())
}
