use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pocketcalc::config::{Config, ConfigSource};
use pocketcalc::calculator::{Accumulator, KeyEvent, copy_to_clipboard, parse_keys};

/// A pocket calculator driven by keypad labels.
#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about, long_about = None)]
struct Args {
    /// Key strings pressed in order, e.g. "5+3=" or "AC 12.5 +/- × 2 =".
    /// Keys are read from stdin line by line when none are given.
    keys: Vec<String>,

    /// Print the display after every key.
    #[arg(long)]
    trace: bool,

    /// Print the final calculator state as JSON instead of the display.
    #[arg(long)]
    json: bool,

    /// Copy the final display to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Path to a config file (defaults to ~/.config/pocketcalc/config.toml).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, source) =
        Config::load(args.config.as_deref()).context("Failed to load config")?;
    init_logging(&config.log_level);

    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Loaded config"),
        ConfigSource::Defaults => debug!("No config file found, using defaults"),
    }

    let mut acc = Accumulator::with_display_config(config.display.clone());
    let mut out = io::stdout().lock();

    if args.keys.is_empty() {
        run_interactive(&mut acc, io::stdin().lock(), args.trace, &mut out)?;
    } else {
        for keys in &args.keys {
            let events = parse_keys(keys).with_context(|| format!("Invalid keys: {keys}"))?;
            press(&mut acc, events, args.trace, &mut out)?;
        }
    }

    let rendered = acc.rendered();
    if args.json {
        let json = serde_json::to_string_pretty(acc.state()).context("Failed to encode state")?;
        writeln!(out, "{json}")?;
    } else if !args.keys.is_empty() && !args.trace {
        writeln!(out, "{rendered}")?;
    }

    if args.copy {
        copy_to_clipboard(&rendered).context("Failed to copy display")?;
        info!(display = %rendered, "Copied display to clipboard");
    }

    Ok(())
}

/// Read key strings line by line and print the display after each line.
fn run_interactive(
    acc: &mut Accumulator,
    input: impl BufRead,
    trace: bool,
    out: &mut impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_keys(&line) {
            Ok(events) => {
                press(acc, events, trace, out)?;
                if !trace {
                    writeln!(out, "{}", acc.rendered())?;
                }
            }
            Err(err) => {
                warn!(input = %line, "Ignoring line");
                eprintln!("error: {err}");
            }
        }
    }

    Ok(())
}

fn press(
    acc: &mut Accumulator,
    events: Vec<KeyEvent>,
    trace: bool,
    out: &mut impl Write,
) -> Result<()> {
    for event in events {
        let shown = acc.handle(event);
        if trace {
            writeln!(out, "{event}\t{shown}")?;
        }
    }
    Ok(())
}

fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
