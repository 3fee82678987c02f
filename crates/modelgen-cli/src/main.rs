use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use modelgen_config::FileFormat;
use tracing::Level;

mod commands;
mod utils;
use commands::{ArtifactArg, cmd_generate, cmd_init, cmd_inspect, cmd_schema};

/// modelgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "modelgen", author, version, about, arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default modelgen config to the current directory.
    Init {
        #[arg(short, long, value_enum, default_value_t = FileFormat::Json)]
        format: FileFormat,
    },
    /// Generate sources for every table in a schema file.
    Generate {
        /// SQL file containing CREATE TABLE statements.
        schema: PathBuf,
        /// Root directory for backend artifacts.
        #[arg(long)]
        backend_dir: Option<PathBuf>,
        /// Root directory for front-end artifacts and store documents.
        #[arg(long)]
        frontend_dir: Option<PathBuf>,
        /// Emit only these artifacts.
        #[arg(long, value_enum, num_args = 1..)]
        only: Vec<ArtifactArg>,
        /// Config file to use instead of modelgen.json / modelgen.yaml.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the models derived from a schema file.
    Inspect {
        schema: PathBuf,
        /// Print models as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the JSON Schema of the derived class model.
    Schema,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { format } => cmd_init(format),
        Commands::Generate {
            schema,
            backend_dir,
            frontend_dir,
            only,
            config,
        } => cmd_generate(schema, backend_dir, frontend_dir, only, config),
        Commands::Inspect { schema, json } => cmd_inspect(schema, json),
        Commands::Schema => cmd_schema(),
    }
}
