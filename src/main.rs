/*!
 * Command-line interface for gut
 */

use std::io::{self, BufWriter, ErrorKind};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use crossterm::style::Colored;
use tracing::{debug, error};

use gut::config::{Args, Config};
use gut::error::GutError;
use gut::identity::SystemIdentity;
use gut::logging::init_logging;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(args.verbose);

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "gut", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        // Output piped into `head` and the like
        Err(GutError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "listing failed");
            eprintln!("gut: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> gut::Result<()> {
    let config = Config::from_args(args)?;
    config.validate()?;
    debug!(?config, "listing");

    // crossterm drops colors on its own when NO_COLOR is set
    Colored::set_ansi_color_disabled(!config.color);

    let identity = SystemIdentity::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    gut::run(&config, &identity, &mut out)
}
