//! `keycalc`: a terminal front end for the keystroke calculator.
//!
//! With key arguments, every character is fed to the calculator and the
//! final displays are printed. Without, stdin is read line by line and the
//! displays are printed after each line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::config::{Config, load_config};
use keycalc::{Calculator, Keymap};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "A keystroke-driven four-function calculator")]
struct Cli {
    /// Path to the config file (default: <config dir>/keycalc/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Right-align the displays to this many columns.
    #[arg(short, long)]
    width: Option<usize>,

    /// Print only the short display.
    #[arg(long)]
    quiet_long: bool,

    /// Keys to type, e.g. `1+2*3=`. Reads stdin when omitted.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config);

    let keymap = config.keymap().context("invalid [keys] section in configuration")?;
    let width = cli.width.unwrap_or(config.display.width);
    let printer = Printer {
        width,
        quiet_long: cli.quiet_long,
    };
    let mut calc = Calculator::new();

    if cli.keys.is_empty() {
        run_interactive(&mut calc, &keymap, &printer)
    } else {
        feed_keys(&mut calc, &keymap, &cli.keys);
        printer.print(&mut io::stdout().lock(), &calc)
    }
}

/// Feed each key argument in order, as if typed one after another.
fn feed_keys(calc: &mut Calculator, keymap: &Keymap, args: &[String]) {
    for keys in args {
        keymap.feed(calc, keys);
    }
}

fn init_logging(config: &Config) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env.as_deref(), config))
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` wins over the config file, which wins over `warn`. Unset,
/// blank or unparsable directives fall through to the next source.
fn log_filter(env: Option<&str>, config: &Config) -> EnvFilter {
    [env, config.log_filter.as_deref()]
        .into_iter()
        .flatten()
        .filter(|directives| !directives.trim().is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn run_interactive(calc: &mut Calculator, keymap: &Keymap, printer: &Printer) -> Result<()> {
    info!("reading keys from stdin");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    printer.print(&mut stdout, calc)?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        debug!(%line, "feeding line");
        keymap.feed(calc, &line);
        printer.print(&mut stdout, calc)?;
    }
    Ok(())
}

struct Printer {
    width: usize,
    quiet_long: bool,
}

impl Printer {
    fn print(&self, out: &mut impl Write, calc: &Calculator) -> Result<()> {
        let snapshot = calc.snapshot();
        let text = if self.quiet_long {
            snapshot.render_short(self.width)
        } else {
            snapshot.render(self.width)
        };
        writeln!(out, "{text}").context("failed to write to stdout")?;
        out.flush().context("failed to flush stdout")
    }
}
