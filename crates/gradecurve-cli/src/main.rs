//! gradecurve CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradecurve", version, about = "Curved grading for online-judge exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade every export and write graded copies
    Grade {
        /// Path to an export .csv or a directory of exports
        #[arg(long)]
        exports: Option<PathBuf>,

        /// Output directory for graded files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Due-date table (JSON)
        #[arg(long)]
        due_dates: Option<PathBuf>,

        /// Curve exponent: < 1 generous, 1 linear, > 1 harsh
        #[arg(long)]
        curve: Option<f64>,

        /// Rounding policy: nearest-half, floor-whole, ceil-half
        #[arg(long)]
        rounding: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Merge graded files into one gradebook
    Merge {
        /// Directory of graded files
        #[arg(long)]
        graded: Option<PathBuf>,

        /// Gradebook output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: csv, markdown
        #[arg(long, default_value = "csv")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check exports and due dates without grading
    Validate {
        /// Path to an export .csv or a directory of exports
        #[arg(long)]
        exports: Option<PathBuf>,

        /// Due-date table (JSON)
        #[arg(long)]
        due_dates: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and due-date files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            exports,
            output,
            due_dates,
            curve,
            rounding,
            config,
        } => commands::grade::execute(exports, output, due_dates, curve, rounding, config),
        Commands::Merge {
            graded,
            output,
            format,
            config,
        } => commands::merge::execute(graded, output, format, config),
        Commands::Validate {
            exports,
            due_dates,
            config,
        } => commands::validate::execute(exports, due_dates, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
