//! Listings feature derivation CLI
//!
//! Derives analysis columns for the Airbnb NYC listings dataset.

use clap::{Parser, Subcommand};
use listings::{Config, Result};

#[derive(Parser)]
#[command(name = "listings")]
#[command(about = "Feature derivation for Airbnb NYC listings data", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive feature columns and write the augmented table
    Featurize {
        /// Override input CSV path
        #[arg(long)]
        input: Option<String>,
        /// Override output CSV path
        #[arg(long)]
        output: Option<String>,
    },
    /// Show input table status
    Status {
        /// Override input CSV path
        #[arg(long)]
        input: Option<String>,
    },
    /// Initialize a new project with default config
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Featurize { input, output } => commands::featurize(&config, input, output),
        Commands::Status { input } => commands::status(&config, input),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use listings::data::table::REQUIRED_COLUMNS;
    use listings::data::ListingTable;
    use listings::features;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!("  1. Edit {} to point at your listings CSV", config_path);
        println!("  2. Run 'listings status' to inspect the input");
        println!("  3. Run 'listings featurize' to derive the feature columns");

        Ok(())
    }

    pub fn featurize(
        config: &Config,
        input: Option<String>,
        output: Option<String>,
    ) -> Result<()> {
        let input_path = input.unwrap_or_else(|| config.data.input_path.clone());
        let output_path = output.unwrap_or_else(|| config.data.output_path.clone());

        log::debug!("Loading {}", input_path);
        let mut table = ListingTable::load(&input_path)?;
        println!("Loaded {} listings from {}", table.len(), input_path);

        let summary = features::featurize(&mut table)?;
        log::info!(
            "Derived {} columns for {} rows ({} rows without price_per_night)",
            features::DERIVED_COLUMNS.len(),
            summary.rows,
            summary.missing_price
        );

        table.save(&output_path)?;
        println!("Wrote {} listings to {}", table.len(), output_path);

        Ok(())
    }

    pub fn status(config: &Config, input: Option<String>) -> Result<()> {
        let input_path = input.unwrap_or_else(|| config.data.input_path.clone());
        let table = ListingTable::load(&input_path)?;

        println!("Input Status");
        println!("───────────────────────────────");
        println!("  Path:     {}", input_path);
        println!("  Rows:     {}", table.len());
        println!("  Columns:  {}", table.column_count());

        // Load succeeding means the required columns resolved
        println!("  Required: {}", REQUIRED_COLUMNS.join(", "));

        Ok(())
    }
}
