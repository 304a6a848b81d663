//! Monsoon onset report tool.
//!
//! Reads an onset forecast summary table and prints:
//! - the table itself with formatted probabilities
//! - classified cells with period, color and legend
//! - per-period cell counts
//! - a single cell's weekly probabilities
//! - the legend

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use onset_csv::filter_usable;
use onset_report::report::render;
use onset_report::{
    exit_code, find_cell, CellDetail, ClassifiedCell, InputSource, LegendRow, OutputFormat, ReportConfig,
    SummaryRow,
};
use period_classifier::{classify_all, PeriodSummary};

#[derive(Parser, Debug)]
#[command(name = "onset-report")]
#[command(about = "Reports over monsoon onset forecast tables")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Palette YAML mapping period labels to color and legend text
    #[arg(long, global = true, env = "ONSET_PALETTE")]
    palette: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Log level
    #[arg(long, global = true, env = "ONSET_LOG", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every row of the table with formatted probabilities
    Table {
        /// Forecast CSV file, or `-` for stdin
        input: String,
    },

    /// Classify each usable cell and show its period
    Classify {
        /// Forecast CSV file, or `-` for stdin
        input: String,
    },

    /// Count cells per period
    Summary {
        /// Forecast CSV file, or `-` for stdin
        input: String,
    },

    /// Show the weekly probabilities of the cell containing a point
    Cell {
        /// Forecast CSV file, or `-` for stdin
        input: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Show the period legend
    Legend,
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    if let Err(e) = init_tracing(&args.log_level, args.log_json) {
        eprintln!("Error: failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Report failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ReportConfig::load(args.palette.as_deref(), args.format)
        .context("Failed to load palette")?;

    let output = match &args.command {
        Command::Table { input } => {
            let table = read_table(input)?;
            render(&table.display_rows(), config.format, "Onset forecast")?
        }
        Command::Classify { input } => {
            let rows = filter_usable(read_table(input)?.rows());
            let cells = ClassifiedCell::build_all(&rows, &config.palette);
            render(&cells, config.format, "Onset period by cell")?
        }
        Command::Summary { input } => {
            let rows = filter_usable(read_table(input)?.rows());
            let summary = PeriodSummary::from_classifications(&classify_all(&rows));
            let onset = summary.onset_count();
            info!(cells = summary.total, onset, "Summarized forecast");
            let title = format!(
                "Onset periods ({} cells, {} with an onset signal)",
                summary.total, onset
            );
            render(&SummaryRow::from_summary(&summary, &config.palette), config.format, &title)?
        }
        Command::Cell { input, lat, lon } => {
            let rows = read_table(input)?.rows();
            let row = find_cell(&rows, *lat, *lon)?;
            let detail = CellDetail::new(row, &config.palette)?;
            let title = format!(
                "Cell {}, {} issued {}: {} ({})",
                detail.cell.lat,
                detail.cell.lon,
                detail.cell.issued,
                detail.cell.legend,
                detail.cell.label
            );
            render(std::slice::from_ref(&detail), config.format, &title)?
        }
        Command::Legend => render(&LegendRow::from_palette(&config.palette), config.format, "Legend")?,
    };

    println!("{}", output);
    Ok(())
}

fn read_table(input: &str) -> Result<onset_csv::ForecastTable> {
    let source = InputSource::from_arg(input);
    info!(source = ?source, "Reading forecast table");
    source
        .read_table()
        .with_context(|| format!("Failed to read forecast table from {}", input))
}
