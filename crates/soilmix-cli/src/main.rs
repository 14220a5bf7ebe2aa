mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "soilmix",
    version,
    about = "NPK soil analysis and organic fertilizer mix advisor"
)]
struct Cli {
    /// Log analysis decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a (simulated) NPK sensor reading and show nutrient status
    Read {
        /// Seed the simulator for a reproducible reading
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the reading to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Recommend an organic mix for a volume of liquid fertilizer
    Mix {
        /// Liquid fertilizer volume in liters
        #[arg(short, long)]
        liters: String,

        /// Use a reading saved with `soilmix read --out`
        #[arg(short, long, value_name = "FILE", conflicts_with_all = ["nitrogen", "seed"])]
        reading: Option<PathBuf>,

        /// Nitrogen percentage (requires --p and --k)
        #[arg(long = "n", requires_all = ["phosphorus", "potassium"], conflicts_with = "seed")]
        nitrogen: Option<Decimal>,

        /// Phosphorus percentage
        #[arg(long = "p", requires = "nitrogen")]
        phosphorus: Option<Decimal>,

        /// Potassium percentage
        #[arg(long = "k", requires = "nitrogen")]
        potassium: Option<Decimal>,

        /// Seed the simulator when no reading is given
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show what each additive does
        #[arg(long)]
        explain: bool,
    },
    /// Describe soil types (all, or one by name)
    Soils {
        name: Option<String>,

        /// Custom reference data file
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Describe crop nutrient needs (all, or one by name)
    Crops {
        name: Option<String>,

        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Show organic additives and the blended nutrient profile
    Organic {
        /// Additive id (e.g., "oil-cake")
        id: Option<String>,

        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// List literature behind the reference data
    References {
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Read { seed, output, out } => commands::read::run(seed, &output, out),
        Commands::Mix {
            liters,
            reading,
            nitrogen,
            phosphorus,
            potassium,
            seed,
            output,
            explain,
        } => {
            let input = commands::mix::ReadingInput::from_args(
                reading,
                nitrogen.zip(phosphorus).zip(potassium).map(|((n, p), k)| (n, p, k)),
                seed,
            );
            commands::mix::run(input, &liters, &output, explain)
        }
        Commands::Soils { name, data } => commands::reference::soils(name.as_deref(), data),
        Commands::Crops { name, data } => commands::reference::crops(name.as_deref(), data),
        Commands::Organic { id, data } => commands::reference::organic(id.as_deref(), data),
        Commands::References { data } => commands::reference::literature(data),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
