pub mod classify;
pub mod schema;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tsmapper_core::{ClassifierConfig, WildcardBounds};

#[derive(Parser)]
#[command(
    name = "tsmapper",
    version,
    about = "Maps Java types to the type names used in TypeScript bindings",
    long_about = "tsmapper classifies reflected Java types (classes, parameterized types and \
                  wildcards) into the TypeScript primitives boolean, Date, number and string, \
                  the structural `object` marker, or the class's own simple name."
)]
pub struct Cli {
    /// Also write log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify Java type expressions and/or JSON type descriptors
    #[command(
        long_about = "Classifies each TYPE given in Java syntax (e.g. 'java.util.List<? extends Number>') \
                      and each descriptor read from --json. Fails if any input cannot be classified, \
                      after printing every result."
    )]
    Classify {
        /// Java type expressions
        #[arg(value_name = "TYPE")]
        types: Vec<String>,

        /// JSON file holding one descriptor or an array of descriptors
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// How wildcard bounds are resolved
        #[arg(long, value_enum, default_value_t = WildcardBoundsArg::Compatible)]
        wildcard_bounds: WildcardBoundsArg,

        /// Exit successfully even if some inputs could not be classified
        #[arg(long)]
        keep_going: bool,
    },
    /// Print the JSON Schema of the type descriptor format
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WildcardBoundsArg {
    /// Only plain class bounds resolve (historical output)
    Compatible,
    /// Bounds are classified like any other type
    Recursive,
}

impl From<WildcardBoundsArg> for ClassifierConfig {
    fn from(arg: WildcardBoundsArg) -> Self {
        let wildcard_bounds = match arg {
            WildcardBoundsArg::Compatible => WildcardBounds::Compatible,
            WildcardBoundsArg::Recursive => WildcardBounds::Recursive,
        };
        ClassifierConfig { wildcard_bounds }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = tsmapper_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Classify {
            types,
            json,
            format,
            wildcard_bounds,
            keep_going,
        } => classify::run(classify::ClassifyOptions {
            types,
            json,
            format,
            config: wildcard_bounds.into(),
            keep_going,
        }),
        Commands::Schema => schema::run(),
    }
}
