use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use junit_scaffold::adapters::fs::locator::DEFAULT_SOURCE_ROOT;
use junit_scaffold::app::generator::TestGenerator;
use junit_scaffold::cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jscaffold")]
#[command(version, about = "Generate mock-aware JUnit 5 test skeletons for Java classes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the test skeleton for a class
    Generate {
        #[command(flatten)]
        target: TargetArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved test plan as JSON
    Plan {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Simple name of the class under test
    #[arg(long = "class", value_name = "NAME")]
    class_name: String,

    /// Source root to search (repeatable, searched in order)
    #[arg(long = "source-root", value_name = "DIR", default_value = DEFAULT_SOURCE_ROOT)]
    source_roots: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    match args.command {
        Commands::Generate { target, output } => {
            let generator = TestGenerator::with_source_roots(target.source_roots);
            cli::generate_test(&generator, &target.class_name, output.as_deref())
        }
        Commands::Plan { target } => {
            let generator = TestGenerator::with_source_roots(target.source_roots);
            cli::print_plan(&generator, &target.class_name)
        }
    }
}
