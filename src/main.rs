use clap::{Parser, Subcommand};
use plan_index::{config, generate, output};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Parser)]
#[command(name = "plan-index")]
#[command(about = "Generate the README index of a learning-plans directory")]
#[command(long_about = "\
Generate the README index of a learning-plans directory

Every markdown file in the directory is a plan when it opens with front
matter carrying a title, a category and a description:

  ---
  title: \"Go Internals\"
  category: \"Languages & Paradigms\"
  description: \"Scheduler, garbage collector, and the runtime\"
  ---

Plans are grouped by category and sorted by title. README.md and CLAUDE.md
are never treated as plans. Files with missing front matter are skipped with
a warning.

Run without arguments to regenerate README.md in the current directory.
Run 'plan-index gen-config' to print a documented index.toml.")]
#[command(version)]
struct Cli {
    /// Plans directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the index (the default)
    Generate,
    /// Exit with status 1 if the index is missing or out of date
    Check,
    /// Show discovered plans without writing anything
    Scan {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock index.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing()?;

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let index_config = config::load_config(&cli.source)?;
            let report = generate::generate(&cli.source, &index_config)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let index_config = config::load_config(&cli.source)?;
            let (scan, outcome) = generate::check(&cli.source, &index_config)?;
            output::print_check_output(&scan, outcome, &index_config.output);
            if outcome != generate::CheckOutcome::UpToDate {
                std::process::exit(1);
            }
        }
        Command::Scan { json } => {
            let index_config = config::load_config(&cli.source)?;
            let scan = generate::scan(&cli.source, &index_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&scan)?);
            } else {
                output::print_scan_output(&scan);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() -> Result<(), ParseError> {
    let filter = diagnostics_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init();
    Ok(())
}

/// Filter from `RUST_LOG`, falling back to `plan_index=info` when unset or
/// invalid. Skip warnings stay on at any level.
fn diagnostics_filter(rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("plan_index=info"));
    Ok(filter.add_directive(format!("{}=warn", generate::SKIP_TARGET).parse()?))
}
