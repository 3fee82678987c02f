use anyhow::{Context, Result};
use modelgen_core::ClassModel;

pub fn cmd_schema() -> Result<()> {
    println!("{}", render_schema()?);
    Ok(())
}

fn render_schema() -> Result<String> {
    let schema = schemars::schema_for!(Vec<ClassModel>);
    serde_json::to_string_pretty(&schema).context("serialize model schema")
}
