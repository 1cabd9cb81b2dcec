//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seatcheck_types::{CarrierType, OutputFormat, Unit};

#[derive(Parser)]
#[command(name = "seatcheck")]
#[command(version)]
#[command(about = "Check whether a bag fits under an airline seat")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override for this run
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a bag against an airline's under-seat limits
    Check {
        /// Airline IATA code (e.g. AA, UA)
        airline: String,

        #[arg(allow_negative_numbers = true)]
        length: f64,

        #[arg(allow_negative_numbers = true)]
        width: f64,

        #[arg(allow_negative_numbers = true)]
        height: f64,

        /// Unit of the dimensions. Uses config value if not specified.
        #[arg(long, short = 'u')]
        unit: Option<Unit>,

        /// Check against the pet carrier policy
        #[arg(long)]
        pet_carrier: bool,

        /// Flight number, stored with the check
        #[arg(long)]
        flight: Option<String>,

        /// Catalogue bag the dimensions belong to
        #[arg(long)]
        bag_id: Option<String>,

        /// Record the check in this user's history
        #[arg(long)]
        user: Option<String>,
    },

    /// Airline reference data
    Airlines {
        #[command(subcommand)]
        command: AirlineCommand,
    },

    /// Bag catalogue
    Bags {
        #[command(subcommand)]
        command: BagCommand,
    },

    /// Show bag check history
    History {
        /// Only this user's checks; all users when omitted
        #[arg(long)]
        user: Option<String>,
    },

    /// Export bag check history to Excel
    Export {
        /// Only this user's checks; all users when omitted
        #[arg(long)]
        user: Option<String>,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Run the REST API server
    Serve {
        /// Listen address (e.g. 127.0.0.1:5000). Uses config value if not specified.
        #[arg(long)]
        bind: Option<String>,

        /// Directory of built front-end assets to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set server listen address
        #[arg(long)]
        set_bind: Option<String>,

        /// Set default dimension unit
        #[arg(long)]
        set_unit: Option<Unit>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable built-in airline seeding
        #[arg(long)]
        set_seed: Option<bool>,

        /// Set static front-end directory
        #[arg(long)]
        set_static_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum AirlineCommand {
    /// List airlines with their limits
    List,

    /// Show one airline
    Show {
        /// IATA code
        code: String,
    },

    /// Create or update airlines from a TOML dataset
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum BagCommand {
    /// List catalogue bags
    List,

    /// Find a bag by brand and model
    Search {
        brand: String,
        model: String,
    },

    /// Add a bag to the catalogue
    Add {
        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(allow_negative_numbers = true)]
        length: f64,

        #[arg(allow_negative_numbers = true)]
        width: f64,

        #[arg(allow_negative_numbers = true)]
        height: f64,

        /// Unit of the dimensions. Uses config value if not specified.
        #[arg(long, short = 'u')]
        unit: Option<Unit>,

        #[arg(long)]
        pet_carrier: bool,

        /// hard-sided or soft-sided
        #[arg(long)]
        carrier_type: Option<CarrierType>,
    },

    /// Import bags from CSV (brand,model,length,width,height[,pet_carrier][,carrier_type])
    Import {
        file: PathBuf,

        /// Unit of the CSV dimensions. Uses config value if not specified.
        #[arg(long, short = 'u')]
        unit: Option<Unit>,

        /// Mark imported bags as verified
        #[arg(long)]
        verified: bool,
    },
}

impl Commands {
    /// Default log level when neither RUST_LOG nor --verbose is given
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Commands::Serve { .. } => "info",
            _ => "warn",
        }
    }
}
