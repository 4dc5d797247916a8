//! vizlet — process-data display symbols with an offline host harness.
//!
//! Run with:  `RUST_LOG=info vizlet [--config FILE] [--data FILE] [--out DIR] [--watch]`

use anyhow::{anyhow, bail, Result};
use tracing_subscriber::EnvFilter;

use vizlet_harness::HarnessOptions;

const USAGE: &str = "\
usage: vizlet [--config FILE] [--data FILE] [--out DIR] [--watch]

  --config FILE  display config (default: $XDG_CONFIG_HOME/vizlet/display.toml)
  --data FILE    data payload JSON (default: built-in sample capture)
  --out DIR      output directory (default: target/vizlet)
  --watch        stay up and re-render on config writes";

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = parse_args()?;
    tracing::info!("vizlet v{} starting", env!("CARGO_PKG_VERSION"));

    vizlet_harness::run(options).map_err(Into::into)
}

fn parse_args() -> Result<HarnessOptions> {
    let mut options = HarnessOptions::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config_path = Some(value(&mut args, "--config")?.into()),
            "--data" => options.data_path = Some(value(&mut args, "--data")?.into()),
            "--out" => options.out_dir = value(&mut args, "--out")?.into(),
            "--watch" => options.watch = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument '{other}'\n{USAGE}"),
        }
    }
    Ok(options)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{flag} needs a value\n{USAGE}"))
}
