//! CLI command implementations.

pub mod build;
pub mod config;
pub mod item;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

/// Human-readable cart price: two places, or four when the prorated price
/// falls between cents.
pub fn format_price(price: Decimal) -> String {
    if price.round_dp(2) == price {
        format!("{:.2}", price)
    } else {
        format!("{:.4}", price)
    }
}

/// Arguments for the build command.
#[derive(Args)]
pub struct BuildArgs {
    /// Path to the order JSON document.
    pub order: String,

    /// Also write the transaction JSON to this file.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the item command.
#[derive(Args)]
pub struct ItemArgs {
    /// Path to the order JSON document the item belongs to.
    pub order: String,

    /// Path to the type-tagged item JSON document.
    pub item: String,

    /// Cart index to assign.
    #[arg(short, long, default_value = "0")]
    pub index: usize,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(2399, 2)), "23.99");
        assert_eq!(format_price(Decimal::new(7, 0)), "7.00");
        assert_eq!(format_price(Decimal::from(20) / Decimal::from(3)), "6.6667");
    }
}
