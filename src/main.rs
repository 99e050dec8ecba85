use anyhow::Result;
use caseconv::cli::output::{print_report, OutputFormat};
use caseconv::{cli, CaseStyle, Config};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert text into kebab-case, dot.case or camelCase", long_about = None)]
struct Cli {
    /// Text to convert (reads lines from stdin when omitted)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Target case style (kebab, dot, camel)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Convert into every supported style
    #[arg(short, long, conflicts_with = "style")]
    all: bool,

    /// Parse each input as a JSON value before converting
    #[arg(long)]
    json_input: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs are rejected
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.style, cli.format, cli.no_color)?;
    if !config.color {
        colored::control::set_override(false);
    }

    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(config.color && io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
    debug!(?config, "resolved configuration");

    let inputs = if cli.inputs.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("No input given. Pass text as arguments or pipe it on stdin.");
        }
        cli::read_inputs(stdin.lock())?
    } else {
        cli.inputs
    };

    let styles = if cli.all {
        CaseStyle::ALL.to_vec()
    } else {
        vec![config.style]
    };

    let report = cli::build_report(&inputs, &styles, cli.json_input)?;
    print_report(&report, config.color, &config.format, cli.all)?;

    // Exit with appropriate code
    if report.rejected > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
