use clap::Parser;
use tracing_subscriber::EnvFilter;

use pocketcalc::repl;

/// Pocket calculator for the terminal.
///
/// With a key sequence argument the whole sequence is dispatched at once and
/// the final display is printed; without one an interactive loop starts.
/// Keys: digits, `.` `+` `-` `*` `/` `%` `=`, `n` (±), `<` (backspace),
/// `c` (clear). The glyphs `×`, `÷`, `−`, and `±` work as well.
#[derive(Debug, Parser)]
#[command(name = "pocketcalc", version)]
struct Cli {
    /// Key sequence to run non-interactively, e.g. "3+4+5="
    keys: Option<String>,

    /// Print the final frame as JSON instead of the bare display text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.keys {
        Some(keys) => repl::run_script(&keys, cli.json),
        None => repl::run_interactive(),
    }
}
