//! foodshare-orders - food search and order management
//!
//! Thin front end over `foodshare_orders::FoodService`: parses arguments,
//! opens the record store and renders outcomes as text or JSON.

use clap::{Parser, Subcommand};
use foodshare_cli::output::{format_count, format_duration, print_error, print_json, OutputFormat, Status};
use foodshare_core::config::Config;
use foodshare_core::error::{exit_codes, Error, ErrorCode, ResultExt};
use foodshare_orders::outcome::FoodMatches;
use foodshare_orders::store::{JsonFileStore, StoreError};
use foodshare_orders::{FoodService, OrderError, Outcome, ServiceConfig};
use foodshare_telemetry::TelemetryConfig;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

/// Food search and order management for Foodshare
#[derive(Parser)]
#[command(name = "foodshare-orders")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the JSON record store (overrides the configuration)
    #[arg(short, long, global = true, value_name = "FILE", env = "FOODSHARE_ORDERS_STORE")]
    store: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuzzy search foods by name and/or restaurant
    Search {
        /// Food name to look for
        #[arg(short, long)]
        food: Option<String>,

        /// Restaurant name to look for
        #[arg(short, long)]
        restaurant: Option<String>,

        /// Maximum accepted edit distance (defaults to the configured value)
        #[arg(short = 'd', long, allow_negative_numbers = true)]
        max_distance: Option<i64>,
    },

    /// Cancel an order that is still in preparation
    Cancel {
        /// Order ID
        order_id: i64,

        /// Phone number the order was placed with
        phone_number: String,
    },

    /// Add or overwrite the comment on an order
    Comment {
        /// Order ID
        order_id: i64,

        /// Name of the person leaving the comment
        person_name: String,

        /// Comment text
        comment: String,
    },

    /// Show the status of an order
    Status {
        /// Order ID
        order_id: i64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e, cli.format);
            return exit(e.code.exit_code());
        }
    };

    let telemetry = TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            config.schema.logging.level.clone()
        },
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    };
    // stderr only: stdout may be a JSON document
    if let Err(e) = foodshare_telemetry::init_with_config(telemetry) {
        Status::error(&format!("Logging disabled: {}", e));
    }

    let started = Instant::now();
    let code = match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e, cli.format);
            e.code.exit_code()
        }
    };
    tracing::debug!(elapsed = %format_duration(started.elapsed()), code, "Command finished");

    if cli.metrics {
        eprintln!("{}", foodshare_telemetry::metrics().export_json());
    }

    exit(code)
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::FAILURE as u8))
}

fn run(cli: &Cli, config: &Config) -> Result<i32, Error> {
    let service = open_service(cli, config)?;

    match &cli.command {
        Commands::Search {
            food,
            restaurant,
            max_distance,
        } => {
            let outcome = service
                .search_food(food.as_deref(), restaurant.as_deref(), *max_distance)
                .map_err(Error::from)?;
            render_search(&outcome, cli.format)
        }
        Commands::Cancel {
            order_id,
            phone_number,
        } => {
            let outcome = service.cancel_order(*order_id, phone_number).map_err(Error::from)?;
            render(&outcome, cli.format)
        }
        Commands::Comment {
            order_id,
            person_name,
            comment,
        } => {
            let outcome = service
                .comment_order(*order_id, person_name, comment)
                .map_err(Error::from)?;
            render(&outcome, cli.format)
        }
        Commands::Status { order_id } => {
            let outcome = service.check_order_status(*order_id).map_err(Error::from)?;
            render(&outcome, cli.format)
        }
    }
}

fn open_service(cli: &Cli, config: &Config) -> Result<FoodService, Error> {
    let store_config = &config.schema.store;
    let path = cli.store.clone().unwrap_or_else(|| store_config.path.clone());

    let store = if store_config.create_if_missing {
        JsonFileStore::open_or_create(&path)
    } else {
        JsonFileStore::open(&path)
    };
    let store = store
        .map_err(|e| match e {
            StoreError::Io { .. } => Error::store_unavailable(&path).with_source(e),
            other => Error::from(OrderError::from(other)),
        })
        .context(format!("While opening record store {}", path.display()))?;

    Ok(FoodService::new(
        Arc::new(store),
        ServiceConfig::from(&config.schema.search),
    ))
}

/// Print an outcome and return the exit code for it.
fn render<T: Serialize + Display>(outcome: &Outcome<T>, format: OutputFormat) -> Result<i32, Error> {
    match format {
        OutputFormat::Json => print_json(outcome)?,
        OutputFormat::Text => match outcome {
            Outcome::Success(_) => Status::success(&outcome.to_string()),
            Outcome::NotFound(_) | Outcome::InvalidState(_) => Status::warning(&outcome.to_string()),
            Outcome::InvalidInput(_) => Status::error(&outcome.to_string()),
        },
    }
    Ok(exit_code(outcome))
}

fn render_search(outcome: &Outcome<FoodMatches>, format: OutputFormat) -> Result<i32, Error> {
    let matches = match (format, outcome) {
        (OutputFormat::Text, Outcome::Success(matches)) => matches,
        _ => return render(outcome, format),
    };

    if matches.is_empty() {
        Status::info(&matches.to_string());
    } else {
        Status::header(&format!("Found {}", format_count(matches.len(), "match", "matches")));
        for hit in matches.iter() {
            println!("  {}", hit);
        }
    }
    Ok(exit_codes::SUCCESS)
}

fn exit_code<T>(outcome: &Outcome<T>) -> i32 {
    match outcome {
        Outcome::InvalidInput(_) => ErrorCode::InvalidInput.exit_code(),
        _ => exit_codes::SUCCESS,
    }
}
