use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use lucent_cli::commands;
use lucent_core::prompt::TermPrompter;
use lucent_core::workspace::Workspace;

#[derive(Parser)]
#[command(name = "lucent")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Build tooling for Lucent Browser, a privacy-focused Firefox fork",
    long_about = "Lucent fetches a pinned Firefox ESR checkout, drives Mozilla's mach \
                  build system to compile and package the browser, and launches the \
                  result with the Lucent privacy profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root holding configs/, chrome/, and the source checkout
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Check toolchain dependencies, fetch the Firefox source, and prepare the build environment
    Setup,

    /// Compile Lucent Browser with mach, optionally packaging or cleaning the build
    Build,

    /// Launch the built browser with the Lucent profile
    Run,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let workspace = Workspace::new(&cli.root);
    let mut prompter = TermPrompter;

    match cli.command {
        Commands::Setup => commands::setup::execute(&workspace, &mut prompter),
        Commands::Build => commands::build::execute(&workspace, &mut prompter),
        Commands::Run => commands::run::execute(&workspace),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("lucent=debug,lucent_cli=debug,lucent_core=debug,lucent_source=debug,lucent_browser=debug")
    } else {
        EnvFilter::new("lucent=info,lucent_cli=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
