//! PDF Spot Disabler - command-line interface
//!
//! `list` prints the Separation colorants of a document; `disable` rewrites
//! the matching ones to the `None` colorant and saves the result.

use clap::{error::ErrorKind, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use pdf_spot_disabler::pdf_document::verify_output_file;
use pdf_spot_disabler::{
    PdfDocument, ReportConfig, ReportFormat, ReportGenerator, Result, RunMode, SpotConfig,
    SpotReport,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

const USAGE_NOTES: &str = "\
FILTER is the name of the spot color being disabled. It can be full
(eg. \"Pantone 877 C\" or \"My Custom Spot\") or partial (eg. \"877\" or
\"Magenta\"), and is case independent (\"Pantone 877 C\" equals
\"PANTONE 877 C\"). Without filters every spot color is disabled.";

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                process::exit(0);
            }
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = e.print();
                process::exit(1);
            }
            _ => {
                let _ = e.print();
                let _ = build_cli().print_help();
                process::exit(1);
            }
        },
    };

    let log_level = matches
        .get_one::<LogLevel>("verbose")
        .copied()
        .unwrap_or(LogLevel::Info);
    init_logging(log_level);

    let outcome = match matches.subcommand() {
        Some(("list", sub)) => run_list(sub),
        Some(("disable", sub)) => run_disable(sub, matches.get_one::<PathBuf>("config")),
        _ => {
            let _ = build_cli().print_help();
            process::exit(1);
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("pdf-spot-disabler")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Application for disabling spot colors in PDF files")
        .long_about(
            "Lists the Separation (spot) colorants used by the pages of a PDF and disables \
             the selected ones by renaming them to the reserved None colorant, so that \
             nothing painted with them is printed.",
        )
        .after_help(USAGE_NOTES)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(help_arg())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_name("LEVEL")
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("info")
                .global(true)
                .help("Log level (error/warn/info/debug/trace)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .help("Configuration file (JSON/YAML)"),
        )
        .subcommand(
            Command::new("list")
                .about("Print the spot colors of a PDF, one per line")
                .disable_help_flag(true)
                .arg(help_arg())
                .arg(input_arg())
                .arg(report_arg()),
        )
        .subcommand(
            Command::new("disable")
                .about("Disable spot colors and write the result")
                .after_help(USAGE_NOTES)
                .disable_help_flag(true)
                .arg(help_arg())
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .value_name("OUTPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .required(true)
                        .help("Output PDF file path"),
                )
                .arg(
                    Arg::new("filters")
                        .value_name("FILTER")
                        .num_args(0..)
                        .help("Spot color names or name fragments to disable"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Force overwrite existing output files"),
                )
                .arg(
                    Arg::new("backup")
                        .short('b')
                        .long("backup")
                        .action(ArgAction::SetTrue)
                        .help("Create backup of original file"),
                )
                .arg(
                    Arg::new("compress")
                        .long("compress")
                        .action(ArgAction::SetTrue)
                        .help("Compress streams before saving"),
                )
                .arg(
                    Arg::new("verify")
                        .long("verify")
                        .action(ArgAction::SetTrue)
                        .help("Verify output file after processing"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Show what would be disabled without writing anything"),
                )
                .arg(report_arg()),
        )
}

fn help_arg() -> Arg {
    Arg::new("help")
        .short('h')
        .long("help")
        .short_alias('?')
        .action(ArgAction::Help)
        .help("Print help")
}

fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(pdf_path)
        .required(true)
        .help("Input PDF file path")
}

fn report_arg() -> Arg {
    Arg::new("report")
        .short('r')
        .long("report")
        .value_name("FILE")
        .value_parser(clap::value_parser!(PathBuf))
        .help("Write a run report (JSON when FILE ends in .json, text otherwise)")
}

fn pdf_path(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(path),
        _ => Err(format!("{} is not a PDF file name", value)),
    }
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("pdf_spot_disabler={}", filter_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }
}

fn run_list(matches: &ArgMatches) -> Result<()> {
    let input = required_path(matches, "input")?;
    let document = PdfDocument::load(input)?;
    let spots = document.describe_spots();
    info!("{} spot colors in {} pages", spots.len(), document.page_count());

    for spot in &spots {
        println!("{}", spot.display_name);
    }

    if let Some(report_path) = matches.get_one::<PathBuf>("report") {
        let report = SpotReport::new(RunMode::List, input).with_listing(spots);
        write_report(&report, report_path)?;
    }
    Ok(())
}

fn run_disable(matches: &ArgMatches, config_file: Option<&PathBuf>) -> Result<()> {
    let input = required_path(matches, "input")?;
    let output = required_path(matches, "output")?;

    let mut config = match config_file {
        Some(path) => SpotConfig::from_file(path)?,
        None => SpotConfig::default(),
    };
    if let Some(filters) = matches.get_many::<String>("filters") {
        config.merge_filters(filters.cloned());
    }
    config.validate()?;
    config.force |= matches.get_flag("force");
    config.backup |= matches.get_flag("backup");
    config.compress |= matches.get_flag("compress");
    config.verify_output |= matches.get_flag("verify");
    let dry_run = matches.get_flag("dry-run");

    display_config_summary(&config, input, output);

    if !dry_run && !config.force {
        if output.exists() {
            return Err(pdf_spot_disabler::Error::Validation(format!(
                "Output file already exists: {} (use --force to overwrite)",
                output.display()
            )));
        }
        if same_file(input, output) {
            return Err(pdf_spot_disabler::Error::Validation(
                "Output would overwrite the input (use --force to allow)".to_string(),
            ));
        }
    }

    let mut document = PdfDocument::load(input)?;
    let outcomes = document.disable_matching_report(&config.filter_spec());
    let mode = if dry_run { RunMode::DryRun } else { RunMode::Disable };
    let report = SpotReport::new(mode, input)
        .with_output(output)
        .with_filters(&config.filters)
        .with_outcomes(outcomes);

    if report.disabled_count == 0 {
        warn!("No spot colors matched");
    }

    if dry_run {
        info!("🔍 Dry run - {} spot colors would be disabled", report.disabled_count);
    } else {
        if config.backup {
            let backup_path = create_backup(input)?;
            info!("📁 Created backup {}", backup_path.display());
        }
        if config.compress {
            document.compress();
        }
        if let Err(e) = document.save(output) {
            if output.exists() {
                if let Err(cleanup_err) = fs::remove_file(output) {
                    error!("Failed to clean up partial output file: {}", cleanup_err);
                }
            }
            return Err(e);
        }
        if config.verify_output {
            verify_output_file(output)?;
            info!("✅ Output file verification passed");
        }
        info!("✅ Disabled {} spot colors", report.disabled_count);
    }

    if let Some(report_path) = matches.get_one::<PathBuf>("report") {
        write_report(&report, report_path)?;
    }
    Ok(())
}

fn required_path<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a PathBuf> {
    matches.get_one::<PathBuf>(id).ok_or_else(|| {
        pdf_spot_disabler::Error::Validation(format!("Missing required argument <{}>", id))
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn create_backup(input: &Path) -> Result<PathBuf> {
    let mut backup = input.as_os_str().to_owned();
    backup.push(".backup");
    let backup = PathBuf::from(backup);
    fs::copy(input, &backup)?;
    Ok(backup)
}

fn write_report(report: &SpotReport, path: &Path) -> Result<()> {
    let config = ReportConfig {
        output_path: path.to_path_buf(),
        format: ReportFormat::from_path(path),
    };
    ReportGenerator::generate(report, &config)?;
    info!("📋 Report generated: {}", path.display());
    Ok(())
}

fn display_config_summary(config: &SpotConfig, input: &Path, output: &Path) {
    debug!("📋 Configuration Summary:");
    debug!("   Input:  {}", input.display());
    debug!("   Output: {}", output.display());
    if config.filters.is_empty() {
        debug!("   Filters: all spot colors");
    } else {
        debug!("   Filters: {}", config.filters.join(", "));
    }
    debug!(
        "   Force: {}  Backup: {}  Compress: {}  Verify: {}",
        config.force, config.backup, config.compress, config.verify_output
    );
}
