//! CLI tool to render a solar flare log as an exact-fraction report.
//!
//! Usage:
//!   flare-report <input> [--date-format=FORMAT] [-o <output>] [-v]
//!
//! If no output file is specified, writes to stdout. Skipped lines are
//! reported on stderr; set `RUST_LOG` to see more.

use clap::Parser;
use flare_report::{ReportOptions, run};
use log::LevelFilter;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

/// Convert flare log measurements to exact fractions and print a
/// fixed-width report.
#[derive(Parser)]
#[command(name = "flare-report", version)]
struct Cli {
    /// Flare log file (7 header lines, then one record per line)
    input: String,

    /// Reformat start dates: YYYY-MM-DD, MM-DD-YYYY, or MM/DD/YYYY
    /// (any other 10-character value leaves dates unchanged)
    #[arg(long, value_name = "FORMAT")]
    date_format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    let Some(out_path) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };
    if let Some(parent) = Path::new(out_path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(Box::new(BufWriter::new(File::create(out_path)?)))
}

/// Run the report. Input and output handles are dropped before returning.
fn execute(cli: &Cli) -> Result<(), String> {
    let options = match cli.date_format.as_deref() {
        Some(format) => ReportOptions::with_date_format(format).map_err(|e| e.to_string())?,
        None => ReportOptions::default(),
    };

    let input = File::open(&cli.input)
        .map(BufReader::new)
        .map_err(|e| format!("opening input file '{}': {e}", cli.input))?;

    let out_name = cli.output.as_deref().unwrap_or("(stdout)");
    let mut output = open_output(cli.output.as_deref())
        .map_err(|e| format!("opening output '{out_name}': {e}"))?;

    if cli.verbose {
        eprintln!("Input:    {}", cli.input);
        eprintln!("Output:   {out_name}");
    }

    let summary = run(input, &mut output, &options).map_err(|e| e.to_string())?;

    if cli.verbose {
        eprintln!(
            "Records:  {} read -> {} rows, {} skipped",
            summary.records_read, summary.rows_written, summary.lines_skipped
        );
    }
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            if e.print().is_err() {
                process::exit(1);
            }
            process::exit(code);
        }
    };
    init_logging();

    if let Err(message) = execute(&cli) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}
