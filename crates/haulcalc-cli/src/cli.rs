//! CLI definition using clap

use clap::{Parser, Subcommand};
use haulcalc_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulcalc")]
#[command(version)]
#[command(about = "Trucking-load profit estimation and batch profitability analysis")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate profit for a single load
    Estimate {
        /// Pickup location (exact name, e.g. "Atlanta, GA")
        origin: String,

        /// Drop-off location (exact name, e.g. "Macon, GA")
        destination: String,

        /// Total load pay ($)
        #[arg(long, short = 'p')]
        pay: f64,

        /// Deadhead miles driven to reach the pickup
        #[arg(long, default_value = "0")]
        deadhead_to: f64,

        /// Deadhead miles driven after drop-off
        #[arg(long, default_value = "0")]
        deadhead_from: f64,

        /// Route distance in miles, for routes not in the known-route table
        #[arg(long, short = 'm')]
        miles: Option<f64>,

        /// Record the estimated load as booked
        #[arg(long, conflicts_with = "consider")]
        book: bool,

        /// Record the estimated load as under consideration
        #[arg(long)]
        consider: bool,
    },

    /// Analyze profitability for a batch of loads from a CSV file
    Analyze {
        /// Path to CSV file containing load records
        input: PathBuf,

        /// Write the full profitability table as CSV
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write the full profitability table as an Excel workbook
        #[arg(long)]
        excel: Option<PathBuf>,
    },

    /// Show booked and under-consideration loads
    Loads,

    /// List known routes and their distances
    Routes,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set fuel cost per mile ($)
        #[arg(long)]
        set_fuel_cost: Option<f64>,

        /// Set dispatcher fee rate (fraction of load pay, e.g. 0.1)
        #[arg(long)]
        set_dispatcher_rate: Option<f64>,

        /// Set maintenance cost per mile ($)
        #[arg(long)]
        set_maintenance_cost: Option<f64>,

        /// Set flat toll cost per load ($)
        #[arg(long)]
        set_toll_cost: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
