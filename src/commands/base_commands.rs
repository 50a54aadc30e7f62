use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::store_args::StoreArgs;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate the climate impact of a scenario for a tenant
    Simulate {
        /// Tenant whose activity forms the baseline
        #[arg(short, long)]
        tenant: String,
        /// Scenario YAML file
        #[arg(short, long, conflicts_with = "preset", required_unless_present = "preset")]
        scenario: Option<String>,
        /// Id of a built-in preset to use instead of a scenario file
        #[arg(short, long)]
        preset: Option<String>,
        /// Override the scenario time horizon in months
        #[arg(short, long)]
        months: Option<i32>,
        #[command(flatten)]
        store: StoreArgs,
        /// Optional impact factors YAML file
        #[arg(short, long)]
        factors: Option<String>,
        /// Optional output YAML file for the full result
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute and print the baseline impact metrics of a tenant
    Baseline {
        /// Tenant whose activity is aggregated
        #[arg(short, long)]
        tenant: String,
        #[command(flatten)]
        store: StoreArgs,
        /// Optional impact factors YAML file
        #[arg(short, long)]
        factors: Option<String>,
    },
    /// List the built-in scenario presets
    Presets,
    /// Print the engine version, supported deltas and impact factors
    Info {
        /// Optional impact factors YAML file
        #[arg(short, long)]
        factors: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
