use std::path::{Path, PathBuf};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "modelgen.json";

/// Front-end state store files that receive per-table fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// snake_case feature name owning the store, e.g. `room_rack`.
    pub feature: String,
    pub actions_file: PathBuf,
    pub reducer_file: PathBuf,
    pub effects_file: PathBuf,
}

impl StoreConfig {
    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn actions_file(&self) -> &Path {
        &self.actions_file
    }

    pub fn reducer_file(&self) -> &Path {
        &self.reducer_file
    }

    pub fn effects_file(&self) -> &Path {
        &self.effects_file
    }
}

/// Top-level modelgen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Root of the generated Java sources (the base package directory).
    #[serde(default = "default_backend_dir")]
    pub backend_dir: PathBuf,
    /// Root of the generated front-end sources (the `app` directory).
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,
    /// Base Java package matching `backend_dir`.
    #[serde(default = "default_java_package")]
    pub java_package: String,
    /// URL prefix of generated REST endpoints.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Default-exported front-end config object providing `serverDomain`.
    #[serde(default = "default_frontend_config_name")]
    pub frontend_config_name: String,
    /// Module path of that config object, relative to the services directory.
    #[serde(default = "default_frontend_config_module")]
    pub frontend_config_module: String,
    /// State store fragments are appended only when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

fn default_backend_dir() -> PathBuf {
    PathBuf::from("backend")
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}

fn default_java_package() -> String {
    "com.example.app".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_frontend_config_name() -> String {
    "appConfig".to_string()
}

fn default_frontend_config_module() -> String {
    "../../config/app-config".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend_dir: default_backend_dir(),
            frontend_dir: default_frontend_dir(),
            java_package: default_java_package(),
            api_prefix: default_api_prefix(),
            frontend_config_name: default_frontend_config_name(),
            frontend_config_module: default_frontend_config_module(),
            store: None,
        }
    }
}

impl GeneratorConfig {
    pub fn backend_dir(&self) -> &Path {
        &self.backend_dir
    }

    pub fn frontend_dir(&self) -> &Path {
        &self.frontend_dir
    }

    pub fn java_package(&self) -> &str {
        &self.java_package
    }

    /// API prefix without a trailing slash.
    pub fn api_prefix(&self) -> &str {
        self.api_prefix.trim_end_matches('/')
    }

    pub fn frontend_config_name(&self) -> &str {
        &self.frontend_config_name
    }

    pub fn frontend_config_module(&self) -> &str {
        &self.frontend_config_module
    }

    pub fn store(&self) -> Option<&StoreConfig> {
        self.store.as_ref()
    }

    /// Java package for a sub-package such as `rest.dto`.
    pub fn package_for(&self, sub_package: &str) -> String {
        if self.java_package.is_empty() {
            sub_package.to_string()
        } else {
            format!("{}.{}", self.java_package, sub_package)
        }
    }

    /// Copy with the output roots replaced where an override is given.
    pub fn with_output_dirs(
        &self,
        backend_dir: Option<PathBuf>,
        frontend_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            backend_dir: backend_dir.unwrap_or_else(|| self.backend_dir.clone()),
            frontend_dir: frontend_dir.unwrap_or_else(|| self.frontend_dir.clone()),
            ..self.clone()
        }
    }
}
