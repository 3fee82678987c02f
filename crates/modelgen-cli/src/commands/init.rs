use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use modelgen_config::{FileFormat, GeneratorConfig};

pub fn cmd_init(format: FileFormat) -> Result<()> {
    let path = PathBuf::from(format!("modelgen.{}", format.extension()));
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let config = GeneratorConfig::default();
    let text = match format {
        FileFormat::Json => {
            serde_json::to_string_pretty(&config).context("serialize default config")?
        }
        FileFormat::Yaml | FileFormat::Yml => {
            serde_yaml::to_string(&config).context("serialize default config")?
        }
    };
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    println!("{} {}", "Created".bright_green(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::load_config;
    use crate::utils::test_support::CwdGuard;
    use serial_test::serial;
    use tempfile::tempdir;

    fn assert_init_creates_loadable_config(format: FileFormat, file: &str) {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());

        cmd_init(format).unwrap();
        assert!(PathBuf::from(file).exists());
        assert_eq!(load_config(None).unwrap(), GeneratorConfig::default());
    }

    #[test]
    #[serial]
    fn cmd_init_creates_json_config() {
        assert_init_creates_loadable_config(FileFormat::Json, "modelgen.json");
    }

    #[test]
    #[serial]
    fn cmd_init_creates_yaml_config() {
        assert_init_creates_loadable_config(FileFormat::Yaml, "modelgen.yaml");
    }

    #[test]
    #[serial]
    fn cmd_init_fails_when_exists() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());

        cmd_init(FileFormat::Json).unwrap();
        let err = cmd_init(FileFormat::Json).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
