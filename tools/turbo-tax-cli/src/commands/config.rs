//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use turbo_tax::StockLocationSource;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[tax]");
    ctx.output
        .kv("default_product_tic", &ctx.config.tax.default_product_tic);
    ctx.output.kv("shipping_tic", &ctx.config.tax.shipping_tic);

    if !ctx.config.stock_locations.is_empty() {
        ctx.output.info("");
        ctx.output.info("Stock locations:");
        for location in &ctx.config.stock_locations {
            let status = if location.is_valid() { "valid" } else { "invalid" };
            ctx.output
                .list_item(&format!("{} ({}) [{}]", location.name, location.id, status));
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.tax.default_product_tic.trim().is_empty() {
        errors.push("tax.default_product_tic is required".to_string());
    }
    if ctx.config.tax.shipping_tic.trim().is_empty() {
        errors.push("tax.shipping_tic is required".to_string());
    }

    for (i, location) in ctx.config.stock_locations.iter().enumerate() {
        if location.active && !location.is_valid() {
            warnings.push(format!(
                "stock_locations[{}] ({}) is active but has an incomplete address",
                i, location.id
            ));
        }
    }

    if ctx.config.stock_locations.first_valid().is_none() {
        warnings.push(
            "no valid stock location: orders whose first shipment has no location will fail"
                .to_string(),
        );
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
