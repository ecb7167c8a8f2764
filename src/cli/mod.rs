mod render;
mod session;

pub use render::{write_notes, write_summary};
pub use session::{Flow, Session};

use std::fs::File;
use std::io::{self, Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::application::SuiteService;
use crate::demos::animals::{Speak, menagerie};
use crate::demos::json_roundtrip::{DEFAULT_DEMO_FILE, run_demo};
use crate::domain::format_cents;
use crate::io::{ExportFormat, ExportKind, Exporter};
use crate::storage::{DEFAULT_DATA_FILE, Store};

/// Productivity Suite - budget tracker, notes and a guessing game
#[derive(Parser)]
#[command(name = "productivity-suite")]
#[command(about = "A small productivity suite persisted to a single JSON file")]
#[command(version)]
pub struct Cli {
    /// Data file path
    #[arg(short, long, default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_file: PathBuf,

    /// Diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence diagnostic output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Omit to start the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (same as no subcommand)
    Menu,

    /// Show income, expenses and net savings
    Summary {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Export ledger entries or notes
    Export {
        /// What to export: ledger, notes
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },

    /// Write a sample record to a JSON file and read it back
    JsonDemo {
        /// File to write
        #[arg(long, default_value = DEFAULT_DEMO_FILE)]
        path: PathBuf,
    },

    /// Make every animal in a mixed collection speak
    Animals,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = Store::new(&self.data_file);

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => {
                let stdin = io::stdin();
                Session::open(store, stdin.lock(), stdout())?.run()?;
            }

            Commands::Summary { format } => {
                let service = open_service(store);
                run_summary_command(&service, &format)?;
            }

            Commands::Export {
                export_type,
                output,
                format,
            } => {
                let service = open_service(store);
                run_export_command(&service, &export_type, output, &format)?;
            }

            Commands::JsonDemo { path } => {
                println!("{}", run_demo(&path)?);
            }

            Commands::Animals => {
                for animal in menagerie() {
                    println!("{}", animal.sound());
                }
            }
        }

        Ok(())
    }
}

/// Non-interactive commands follow the same recovery policy as the menu,
/// reporting discarded data on stderr.
fn open_service(store: Store) -> SuiteService {
    let (service, recovered_from) = SuiteService::open(store);
    if let Some(err) = recovered_from {
        eprintln!(
            "⚠️  Could not load saved data ({err}). Showing an empty ledger; {} was left untouched.",
            service.store().path().display()
        );
    }
    service
}

fn run_summary_command(service: &SuiteService, format: &str) -> Result<()> {
    let report = service.ledger_report();
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "csv" => {
            println!("type,amount");
            println!("income,{}", format_cents(report.total_income));
            println!("expense,{}", format_cents(report.total_expenses));
            println!("net,{}", format_cents(report.net_savings));
        }
        "table" => write_summary(&mut stdout().lock(), &report)?,
        other => anyhow::bail!("Invalid format '{}'. Valid formats: table, json, csv", other),
    }
    Ok(())
}

fn run_export_command(
    service: &SuiteService,
    export_type: &str,
    output: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    let kind = ExportKind::from_str(export_type).ok_or_else(|| {
        anyhow::anyhow!("Invalid export type '{}'. Valid types: ledger, notes", export_type)
    })?;
    let format = ExportFormat::from_str(format)
        .ok_or_else(|| anyhow::anyhow!("Invalid format '{}'. Valid formats: csv, json", format))?;

    let writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = Exporter::new(service).export(kind, format, writer)?;
    if let Some(path) = output {
        eprintln!("Exported {} record(s) to {}", count, path.display());
    }
    Ok(())
}
