//! lstack CLI
//!
//! Runs stack commands from a script file, or from stdin when no script is
//! given. Results go to stdout; logs and command errors go to stderr.

use clap::Parser as ClapParser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process;

use lstack::{CommandError, Session, SessionConfig};
use tracing::debug;

#[derive(ClapParser)]
#[command(name = "lstack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Push, pop and inspect a linked stack from the command line", long_about = None)]
struct Cli {
    /// Script with one command per line (reads stdin when omitted)
    script: Option<PathBuf>,

    /// Path to session configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the stack after every push and pop
    #[arg(long)]
    echo_render: bool,

    /// Report failing commands and keep running
    #[arg(long)]
    keep_going: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    lstack::logging::init(cli.verbose);

    match run(&cli) {
        Ok(0) => {}
        Ok(failures) => {
            eprintln!("{} command(s) failed", failures);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<usize, CommandError> {
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    }
    .with_overrides(cli.echo_render, cli.keep_going);
    debug!(?config, "loaded configuration");

    let mut session = Session::new(config);
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                CommandError::Io(io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            })?;
            session.run(BufReader::new(file), &mut out, &mut err, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session.run(stdin.lock(), &mut out, &mut err, interactive)
        }
    }
}
