mod rows;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rows::parse_rows;
use sheetfill_engine::{ActionReport, FillColumn, TabularStore, WorkflowManager, WorkflowSpec};
use sheetfill_store::CsvStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sheetfill",
    about = "Fill spreadsheet columns from templates, per row range",
    version
)]
struct Cli {
    /// CSV file to operate on (first record is the header)
    #[arg(long, short = 'f', global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show row count and column names of the loaded file
    Info,

    /// Run a single fill-column action
    Fill {
        /// Destination column (created if absent)
        #[arg(long)]
        target: String,

        /// Source column; repeat for multiple sources
        #[arg(long = "source", required = true)]
        sources: Vec<String>,

        /// Format template, e.g. "{Voornaam} {Achternaam}"
        #[arg(long)]
        template: String,

        /// Row selection: "all", a single 1-based row, or "from-to"
        #[arg(long, default_value = "all")]
        rows: String,

        /// Save the result back to the input file
        #[arg(long)]
        save: bool,

        /// Write the result to a different file instead
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a workflow file (JSON) of actions against the loaded file
    Run {
        /// Path to the workflow file
        #[arg(long)]
        workflow: PathBuf,

        /// Row selection: "all", a single 1-based row, or "from-to"
        #[arg(long, default_value = "all")]
        rows: String,

        /// Save the result back to the input file
        #[arg(long)]
        save: bool,

        /// Write the result to a different file instead
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(path) = cli.file.as_deref() else {
        bail!("no input file given (use --file)");
    };
    let mut store = CsvStore::open_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    match cli.command {
        Commands::Info => {
            println!("File: {}", path.display());
            println!("Rows: {}", store.row_count());
            println!("Columns: {}", store.column_names().join(", "));
        }
        Commands::Fill {
            target,
            sources,
            template,
            rows,
            save,
            output,
        } => {
            let range = parse_rows(&rows)?;
            let action = FillColumn::new(target, sources, &template)?;
            let report = sheetfill_engine::Action::from(action).execute(&mut store, range)?;
            print_report(&report);
            persist(&mut store, save, output.as_deref())?;
        }
        Commands::Run {
            workflow,
            rows,
            save,
            output,
        } => {
            let range = parse_rows(&rows)?;
            let raw = std::fs::read_to_string(&workflow)
                .with_context(|| format!("failed to read {}", workflow.display()))?;
            let spec: WorkflowSpec = serde_json::from_str(&raw)
                .with_context(|| format!("invalid workflow file {}", workflow.display()))?;

            // Register under the file-given name for the duration of the run,
            // mirroring the temporary-workflow pattern of the original caller.
            let mut manager = WorkflowManager::new();
            let name = spec.name.clone();
            manager.insert(spec.into_workflow()?)?;

            let result = manager
                .get(&name)
                .map(|wf| {
                    wf.execute(&mut store, range, &mut |pct, label| {
                        println!("[{pct:5.1}%] {label}");
                    })
                })
                .transpose();
            manager.remove_workflow(&name)?;

            let reports = result?.unwrap_or_default();
            for report in &reports {
                print_report(report);
            }
            persist(&mut store, save, output.as_deref())?;
        }
    }

    Ok(())
}

fn print_report(report: &ActionReport) {
    println!("{report}");
}

fn persist(store: &mut CsvStore, save: bool, output: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = output {
        store.save_to(path)?;
        tracing::info!(path = %path.display(), "wrote result");
    }
    if save {
        store.save()?;
        tracing::info!("saved changes to input file");
    }
    if !save && output.is_none() {
        println!("Changes not saved (use --save or --output).");
    }
    Ok(())
}
