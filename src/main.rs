//! CLI entry point for the PM2.5 AQI tool.
//!
//! Provides subcommands for computing index values from raw concentrations,
//! averaging a batch of readings before indexing, and inspecting the
//! breakpoint table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pm25_aqi::aqi::{compute_aqi, select_segment};
use pm25_aqi::breakpoints::PM25_BREAKPOINTS;
use pm25_aqi::output::{AqiRecord, print_json, print_pretty};
use pm25_aqi::utility::mean;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "pm25_aqi")]
#[command(about = "Compute US EPA AQI values from PM2.5 concentrations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the AQI for one or more PM2.5 readings (µg/m³)
    Compute {
        /// PM2.5 concentrations in µg/m³
        #[arg(value_name = "CONCENTRATION", num_args = 1.., required = true)]
        concentrations: Vec<f64>,

        /// Round to the nearest whole index for display
        #[arg(short, long, default_value_t = false)]
        round: bool,

        /// Emit each result as pretty-printed JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Average a batch of readings, then compute the AQI of the mean
    Mean {
        /// PM2.5 concentrations in µg/m³
        #[arg(value_name = "CONCENTRATION", num_args = 1.., required = true)]
        concentrations: Vec<f64>,

        /// Round to the nearest whole index for display
        #[arg(short, long, default_value_t = false)]
        round: bool,

        /// Emit the result as pretty-printed JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the PM2.5 breakpoint table
    Table {
        /// Emit the table as pretty-printed JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/pm25_aqi.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("pm25_aqi.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            concentrations,
            round,
            json,
        } => {
            for &concentration in &concentrations {
                let record = index_reading(concentration);
                if json {
                    print_json(&record)?;
                } else {
                    println!("{}", record.to_line(round));
                }
            }
            info!(readings = concentrations.len(), "Batch indexed");
        }
        Commands::Mean {
            concentrations,
            round,
            json,
        } => {
            let average = mean(&concentrations);
            info!(
                readings = concentrations.len(),
                mean_concentration = average,
                "Batch averaged"
            );

            let record = index_reading(average);
            if json {
                print_json(&record)?;
            } else {
                println!("{}", record.to_line(round));
            }
        }
        Commands::Table { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&PM25_BREAKPOINTS)?);
            } else {
                for (position, segment) in PM25_BREAKPOINTS.iter().enumerate() {
                    println!(
                        "{}. AQI {:>3} - {:>3}   PM2.5 {:>5} - {:>5} µg/m³",
                        position + 1,
                        segment.index_low,
                        segment.index_high,
                        segment.concentration_low,
                        segment.concentration_high
                    );
                }
            }
        }
    }

    Ok(())
}

/// Runs one reading through the engine and packages the result for output.
fn index_reading(concentration: f64) -> AqiRecord {
    let segment = select_segment(&PM25_BREAKPOINTS, concentration);
    let aqi = compute_aqi(concentration, segment);

    let record = AqiRecord::new(concentration, aqi, segment);
    print_pretty(&record);
    record
}
