mod commands;
mod error;

use clap::Parser;
use tracing::debug;

use commands::Commands;
use error::CliError;
use winctl_core::{Config, config, log};

#[derive(Parser)]
#[command(
    name = "winctl",
    version,
    about = "Query and manipulate desktop windows"
)]
struct Cli {
    /// Log to stderr at debug level instead of the log file
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let config = config::load();

    if cli.verbose {
        log::init_stderr("debug");
    } else {
        log::init(&config.log);
    }

    if let Err(e) = run(&cli.command, &config) {
        debug!(event = "cli.command_failed", code = e.code(), error = %e);
        eprintln!("error[{}]: {e}", e.code());
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run(command: &Commands, config: &Config) -> Result<(), CliError> {
    let ctl = winctl_windows::native(config);
    let mut stdout = std::io::stdout().lock();
    commands::execute(&ctl, command, &mut stdout)
}

#[cfg(not(windows))]
fn run(_command: &Commands, _config: &Config) -> Result<(), CliError> {
    Err(CliError::Unsupported {
        os: std::env::consts::OS,
    })
}
