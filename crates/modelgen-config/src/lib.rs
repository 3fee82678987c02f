pub mod config;
pub mod file_format;

pub use config::{DEFAULT_CONFIG_FILE, GeneratorConfig, StoreConfig};
pub use file_format::FileFormat;
