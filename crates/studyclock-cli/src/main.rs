use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod title;

#[derive(Parser)]
#[command(name = "studyclock", version, about = "Studyclock work/rest timer")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer interactively in this terminal
    Run(commands::run::RunArgs),
    /// Feed synthetic ticks to a fresh timer and print the resulting events
    Simulate(commands::simulate::SimulateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Display formatting helpers
    Format {
        #[command(subcommand)]
        action: commands::format::FormatAction,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "studyclock=debug,studyclock_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Format { action } => commands::format::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
