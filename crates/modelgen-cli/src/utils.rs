use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use modelgen_config::{FileFormat, GeneratorConfig};
use tracing::{debug, info};

/// Config file names searched in the current directory, in order.
pub const CONFIG_CANDIDATES: [&str; 3] = ["modelgen.json", "modelgen.yaml", "modelgen.yml"];

/// Load the generator config.
///
/// An explicit path must exist. Otherwise the first candidate found in the
/// current directory is used, falling back to defaults when there is none.
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            path.to_path_buf()
        }
        None => match CONFIG_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
        {
            Some(found) => found,
            None => {
                debug!("no config file found, using defaults");
                return Ok(GeneratorConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = parse_config(&path, &content)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn parse_config(path: &Path, content: &str) -> Result<GeneratorConfig> {
    match FileFormat::from_path(path) {
        Some(FileFormat::Yaml | FileFormat::Yml) => serde_yaml::from_str(content)
            .with_context(|| format!("parse YAML config {}", path.display())),
        Some(FileFormat::Json) | None => serde_json::from_str(content)
            .with_context(|| format!("parse JSON config {}", path.display())),
    }
}

/// Read the whole schema text. Failing to read it aborts the run.
pub fn read_schema(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read schema {}", path.display()))
}

/// Write a file, creating missing parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
