//! CLI for check extraction and renaming.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use checkr_core::{CheckRenamer, CheckrConfig};

/// Extract the payee and check number from a scanned check and rename the
/// file to `{payee}_{check_number}`.
#[derive(Parser)]
#[command(name = "checkr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Check file to process (image or PDF)
    input: PathBuf,

    /// Use LLM-assisted extraction (requires OPENAI_API_KEY)
    #[arg(long)]
    llm: bool,

    /// Directory to place the renamed file in (created if missing)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Warnings (like the LLM credential fallback) stay visible by default;
    // RUST_LOG raises or lowers verbosity from there.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // clap exits 2 on bad arguments by default; this tool reports 1 for
    // missing arguments and processing errors alike. Help and version output
    // still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(target) => {
            println!(
                "{} Renamed to {}",
                style("✓").green(),
                target.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("✗").red());
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    let mut config = CheckrConfig::default();

    if cli.llm {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.is_empty() => {
                config.extraction.use_llm = true;
                config.extraction.api_key = Some(key);
            }
            _ => {
                warn!(
                    "LLM mode requested but OPENAI_API_KEY is not set; \
                     falling back to regex-based extraction"
                );
            }
        }
    }

    let renamer = CheckRenamer::from_config(&config)?;
    let target = renamer.rename(&cli.input, cli.output_dir.as_deref())?;

    Ok(target)
}
