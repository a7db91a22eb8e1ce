//! runmap - map everything an npm script run will trigger.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use runmap_lib::report::{self, ReportKind};
use runmap_lib::resolve;

mod output;

/// Map the full action tree behind a package's npm scripts
#[derive(Parser)]
#[command(name = "runmap", version, about)]
struct Cli {
  /// Directory runmap should work on (where the package.json is at)
  #[arg(short, long, default_value = ".")]
  dir: PathBuf,

  /// A specific npm script to map (default: every declared script)
  #[arg(short, long)]
  script_name: Option<String>,

  /// Report kind: html or json. Unrecognized values fall back to html
  #[arg(short = 't', long, default_value = "html")]
  report_type: String,

  /// Directory the report is written under (default: current directory)
  #[arg(long)]
  out: Option<PathBuf>,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();
  if let Err(err) = run(&cli) {
    output::print_error(&format!("{err:#}"));
    std::process::exit(1);
  }
}

fn run(cli: &Cli) -> Result<()> {
  let (actions, manifest_path) = resolve::map_scripts(&cli.dir, cli.script_name.as_deref())
    .with_context(|| format!("failed to map scripts under {}", cli.dir.display()))?;

  let out_dir = match &cli.out {
    Some(dir) => dir.clone(),
    None => std::env::current_dir().context("failed to determine the current directory")?,
  };

  let kind = ReportKind::parse(&cli.report_type);
  let report_path = report::write_report(kind, &actions, &manifest_path, &out_dir)?;

  output::print_success(&format!(
    "Mapped {} script(s) from {}",
    actions.len(),
    manifest_path.display()
  ));
  output::print_info(&format!("Report written to {}", report_path.display()));
  Ok(())
}
