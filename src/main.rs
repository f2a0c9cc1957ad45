use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use ftracker::config::AppConfig;
use ftracker::error::error_message;
use ftracker::export::{self, OutputFormat};
use ftracker::logging::{init_logging, LogLevel};
use ftracker::models::{Activity, WorkoutInput, WorkoutReport};
use ftracker::report::UNKNOWN_TRAINING_TYPE;

/// ftracker - Workout Statistics CLI
///
/// Computes distance, mean speed and calories burned for running, walking
/// and swimming sessions.
#[derive(Parser)]
#[command(name = "ftracker")]
#[command(author = "ftracker Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Workout Statistics CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Report format (text, table, json, csv)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Running session from a step count
    Run {
        /// Number of steps
        #[arg(short, long)]
        steps: u32,

        /// Duration in hours
        #[arg(short, long)]
        duration: f64,

        /// Body weight in kg (config default if omitted)
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Walking session from a step count
    Walk {
        /// Number of steps
        #[arg(short, long)]
        steps: u32,

        /// Duration in hours
        #[arg(short, long)]
        duration: f64,

        /// Body weight in kg (config default if omitted)
        #[arg(short, long)]
        weight: Option<f64>,

        /// Height in cm (config default if omitted)
        #[arg(long)]
        height: Option<f64>,
    },

    /// Pool swimming session
    Swim {
        /// Number of pool lengths swum
        #[arg(short, long)]
        laps: u32,

        /// Duration in hours
        #[arg(short, long)]
        duration: f64,

        /// Pool length in meters (config default if omitted)
        #[arg(short, long)]
        pool_length: Option<u32>,

        /// Body weight in kg (config default if omitted)
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Training summary for an activity given by its label
    Show {
        /// Training type label (Running, Walking, Swimming)
        training_type: String,

        /// Number of steps
        #[arg(short, long, default_value = "0")]
        steps: u32,

        /// Duration in hours
        #[arg(short, long)]
        duration: f64,

        /// Body weight in kg
        #[arg(short, long)]
        weight: Option<f64>,

        /// Height in cm
        #[arg(long)]
        height: Option<f64>,

        /// Pool length in meters
        #[arg(short, long)]
        pool_length: Option<u32>,

        /// Number of pool lengths swum
        #[arg(short, long, default_value = "0")]
        laps: u32,
    },

    /// Manage the configuration file
    Config {
        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,

        /// Print the active configuration
        #[arg(short, long)]
        show: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "Error:".red().bold(), error_message(&err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // A missing custom file is created by `config --init`
    let config = match &cli.config {
        Some(path) if path.exists() => AppConfig::load_from_file(path)?,
        Some(_) => AppConfig::default(),
        None => AppConfig::load_or_default(),
    };

    let mut log_config = config.logging.clone();
    log_config.level = LogLevel::from_verbosity(log_config.level, cli.verbose);
    init_logging(&log_config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = match cli.format.as_deref() {
        Some(name) => name.parse::<OutputFormat>()?,
        None => config.output.format,
    };
    let athlete = &config.athlete;

    let input = match cli.command {
        Commands::Run { steps, duration, weight } => {
            WorkoutInput::running(steps, duration, weight.unwrap_or(athlete.weight_kg))
        }

        Commands::Walk { steps, duration, weight, height } => WorkoutInput::walking(
            steps,
            duration,
            weight.unwrap_or(athlete.weight_kg),
            height.unwrap_or(athlete.height_cm),
        ),

        Commands::Swim { laps, duration, pool_length, weight } => WorkoutInput::swimming(
            pool_length.unwrap_or(config.pool.length_m),
            laps,
            duration,
            weight.unwrap_or(athlete.weight_kg),
        ),

        Commands::Show {
            training_type,
            steps,
            duration,
            weight,
            height,
            pool_length,
            laps,
        } => {
            let Some(activity) = Activity::from_label(&training_type) else {
                tracing::warn!(training_type = %training_type, "Unknown training type");
                println!("{}", UNKNOWN_TRAINING_TYPE.yellow());
                return Ok(());
            };

            WorkoutInput {
                activity,
                action_count: steps,
                duration_hours: duration,
                weight_kg: weight.unwrap_or(athlete.weight_kg),
                height_cm: height.unwrap_or(athlete.height_cm),
                pool_length_m: pool_length.unwrap_or(config.pool.length_m),
                pool_laps: laps,
            }
        }

        Commands::Config { init, show } => {
            return manage_config(cli.config, config, init, show);
        }
    };

    let report = WorkoutReport::from_input(&input);

    match cli.output {
        Some(path) => {
            export::export_report(&report, format, &path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("{}", format!("✓ Report written to {}", path.display()).green());
        }
        None => {
            let rendered = export::render(&report, format)?;
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

fn manage_config(
    path: Option<PathBuf>,
    mut config: AppConfig,
    init: bool,
    show: bool,
) -> Result<()> {
    if init {
        let written = match path {
            Some(path) => {
                config.save_to_file(&path)?;
                path
            }
            None => config.save_default()?,
        };
        println!("{}", format!("✓ Configuration written to {}", written.display()).green());
    }

    if show || !init {
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{}", toml_content);
    }

    Ok(())
}
