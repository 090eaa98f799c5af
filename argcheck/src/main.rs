//! `argcheck`: run one precondition check on shell arguments.
//!
//! Prints the validated value on success so it can be captured:
//!
//! ```bash
//! url=$(argcheck --message "DATABASE_URL must be set" not-empty "$DATABASE_URL") || exit 1
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use argcheck::boundary::Rejecting;
use argcheck::command::CheckRequest;
use argcheck::config::{ArgcheckConfig, DEFAULT_CONFIG_FILE, load_config, write_config};
use argcheck::{ValidationFailure, exit_codes, logging};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "argcheck",
    version,
    about = "Validate a value from the shell, printing it back on success"
)]
struct Cli {
    /// Config file with `log_filter` and per-check `[messages]`.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Failure message to use instead of the default (wins over the config).
    #[arg(short, long, global = true)]
    message: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    #[command(flatten)]
    Check(CheckRequest),
}

fn main() {
    let code = match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Init { force } => {
            logging::init(&ArgcheckConfig::default().log_filter);
            if cli.message.is_some() {
                bail!("--message applies to checks, not init");
            }
            cmd_init(&cli.config, force)
        }
        Command::Check(request) => {
            let loaded = load_config(&cli.config)?;
            logging::init(&loaded.config.log_filter);
            loaded.log(&cli.config);
            cmd_check(request, cli.message.as_deref(), &loaded.config)
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &ArgcheckConfig::default())?;
    Ok(exit_codes::OK)
}

fn cmd_check(request: CheckRequest, message: Option<&str>, config: &ArgcheckConfig) -> Result<i32> {
    let kind = request.kind();
    let message = message.or_else(|| config.message_for(kind));
    match request.run(message).rejecting(kind.name()) {
        Ok(actual) => {
            println!("{actual}");
            Ok(exit_codes::OK)
        }
        Err(err) => match err.downcast_ref::<ValidationFailure>() {
            Some(failure) => {
                report(failure);
                Ok(exit_codes::FAILED)
            }
            None => Err(err),
        },
    }
}

/// Write the failure message to stderr, newline terminated.
fn report(failure: &ValidationFailure) {
    let message = failure.message();
    if message.ends_with('\n') {
        eprint!("{message}");
    } else {
        eprintln!("{message}");
    }
}
