use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use modelgen_core::{ClassModel, scan_schema};

use crate::utils::read_schema;

pub fn cmd_inspect(schema: PathBuf, json: bool) -> Result<()> {
    let text = read_schema(&schema)?;
    let models = scan_schema(&text);

    if json {
        let out = serde_json::to_string_pretty(&models).context("serialize models")?;
        println!("{out}");
        return Ok(());
    }

    if models.is_empty() {
        println!("{}", "No tables found.".bright_yellow());
        return Ok(());
    }
    for model in &models {
        print_model(model);
    }
    Ok(())
}

fn print_model(model: &ClassModel) {
    let base = model
        .base_type()
        .map(|b| b.interchange_class())
        .unwrap_or("-");
    println!(
        "{} {} {}",
        model.table_name().bright_cyan().bold(),
        "->".bright_black(),
        model.class_name().bright_white()
    );
    println!("  {} {}", "Base:".cyan(), base);
    for property in model.properties() {
        let kind = if property.is_reference() {
            "reference".bright_magenta()
        } else {
            property.sql_type.as_str().normal()
        };
        println!(
            "  {} {}: {} / {} ({})",
            "-".bright_black(),
            property.property_name.bright_white(),
            property.entity_type,
            property.ui_type,
            kind
        );
    }
}
