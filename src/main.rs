//! Coating & Biogas Calculator
//!
//! Command line front end for the edible-coating and biogas estimators.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use coating_biogas::console::{Console, factor_tables};
use coating_biogas::numeric::coerce_number;
use coating_biogas::{
    BiogasRecord, BiogasRequest, CoatingRequest, DEFAULT_EXPORT_FILE, Session, estimate_coating,
};

#[derive(Parser)]
#[command(name = "coating-biogas")]
#[command(about = "Edible-coating shelf-life and biogas yield estimator")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject negative quantities instead of computing with them
    #[arg(long, global = true, env = "COATING_BIOGAS_STRICT")]
    strict: bool,

    /// Where exports are written
    #[arg(long, global = true, env = "COATING_BIOGAS_EXPORT_PATH", default_value = DEFAULT_EXPORT_FILE)]
    export_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate solids deposit and shelf-life extension for a coated item
    Coat {
        /// Item being coated (apple, banana, tomato, cheese, ...)
        object: String,

        /// Coating material (pectin, chitosan, wax, ...)
        coating: String,

        /// Application method (spray, dip, brush, ...)
        method: String,

        /// Solids concentration of the solution in percent
        #[arg(short, long, allow_hyphen_values = true)]
        concentration: String,

        /// Solution volume per item in mL
        #[arg(short = 'V', long, allow_hyphen_values = true)]
        volume: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also write the export document
        #[arg(long)]
        export: bool,
    },

    /// Estimate methane, biogas and energy from organic waste
    Biogas {
        /// Waste type (food, manure, green, ...)
        waste: String,

        /// Wet mass of waste in kg
        #[arg(short, long, allow_hyphen_values = true)]
        mass: String,

        /// Retention time in days (recorded only)
        #[arg(short, long, allow_hyphen_values = true)]
        retention: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also write the export document
        #[arg(long)]
        export: bool,
    },

    /// List factor tables and their fallbacks
    Factors,

    /// Interactive session with export and clear
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Coat {
            object,
            coating,
            method,
            concentration,
            volume,
            json,
            export,
        } => {
            let request = CoatingRequest {
                object: object.into(),
                coating: coating.into(),
                method: method.into(),
                concentration_percent: coerce_number(&concentration),
                volume_ml: coerce_number(&volume),
            };
            if cli.strict {
                request.validate()?;
            }

            let result = estimate_coating(&request);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result);
            }

            if export {
                let mut session = Session::new();
                session.record_coating(result);
                session.export_to(&cli.export_path)?;
                println!("Exported to {}", cli.export_path.display());
            }
        }

        Commands::Biogas {
            waste,
            mass,
            retention,
            json,
            export,
        } => {
            let request = BiogasRequest {
                waste_type: waste.into(),
                mass_kg: coerce_number(&mass),
                retention_days: retention.as_deref().map(coerce_number),
            };
            if cli.strict {
                request.validate()?;
            }

            let result = request.estimate();
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result);
            }

            if export {
                let mut session = Session::new();
                session.record_biogas(BiogasRecord {
                    result,
                    retention_days: request.retention_days,
                });
                session.export_to(&cli.export_path)?;
                println!("Exported to {}", cli.export_path.display());
            }
        }

        Commands::Factors => {
            print!("{}", factor_tables());
        }

        Commands::Session => {
            run_repl(Console::new(cli.export_path, cli.strict))?;
        }
    }

    Ok(())
}

/// Interactive loop over the console interpreter
fn run_repl(mut console: Console) -> Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to initialize readline")?;

    println!("{}", "Coating & Biogas Calculator".bright_cyan().bold());
    println!("Type '{}' for commands\n", "help".bright_yellow());

    let mut stdout = io::stdout();
    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match console.execute(line, &mut stdout) {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("{} {:#}", "Error:".red(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            }
        }
    }

    Ok(())
}
