//! Command line surface: arguments, logging setup and the top-level run.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use passwd_parser::app;
use passwd_parser::output::{self, Style};

#[derive(Debug, Parser)]
#[command(
    name = "passwd-parser",
    version,
    about = "Join a passwd file and a group file into a JSON report of users and their groups"
)]
pub struct CliArgs {
    /// Passwd-style input file
    #[arg(short, long, env = "PASSWD_PARSER_PASSWD", default_value = "/etc/passwd")]
    pub passwd: PathBuf,

    /// Group-style input file
    #[arg(short, long, env = "PASSWD_PARSER_GROUP", default_value = "/etc/group")]
    pub group: PathBuf,

    /// Print the JSON document on a single line
    #[arg(long, env = "PASSWD_PARSER_COMPACT", default_value_t = false)]
    pub compact: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "off" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Build the report and print it. Diagnostics decide the exit code; only I/O is an error.
pub fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    init_logging(args.log);
    info!(passwd = %args.passwd.display(), group = %args.group.display(), "starting");

    let report = app::run(&args.passwd, &args.group).map_err(|e| anyhow!(e))?;

    let style = if args.compact { Style::Compact } else { Style::Pretty };
    output::write_report(&report, style, io::stdout().lock(), io::stderr().lock())
        .context("write report")?;

    Ok(ExitCode::from(report.exit_code()))
}
