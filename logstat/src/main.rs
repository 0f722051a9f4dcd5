use anyhow::Result;
use clap::{Parser, ValueEnum};
use logstat_core::logging::init_logging;
use logstat_core::report::ReportKind;
use logstat_core::run_report;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "Log file parser: per-endpoint request totals and response times"
)]
struct Cli {
    /// File to parse (possibly multiple values)
    #[arg(short, long = "file", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Report type
    #[arg(short, long, value_enum, default_value_t = ReportArg::Average)]
    report: ReportArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportArg {
    Average,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Average => ReportKind::Average,
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let table = run_report(&cli.files, cli.report.into())?;
    Ok(table)
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    match run(&cli) {
        Ok(table) => println!("{table}"),
        Err(e) => {
            error!(error = %e, "report failed");
            eprintln!("logstat error: {e}");
            std::process::exit(1);
        }
    }
}
