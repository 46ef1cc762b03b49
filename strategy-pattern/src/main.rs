//! Runs the navigation, payment and sorting client scenarios.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use strategy_pattern::{navigation, payment, sorting};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the strategy demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which demonstration to run
    #[arg(short, long, value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// Print a coloured title before each demonstration
    #[arg(long)]
    headers: bool,

    /// Log every strategy swap to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// The client scenarios that can be selected
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    /// All three, in order
    All,
    /// Bike, car, walk
    Navigation,
    /// Credit card, then `PayPal`
    Payment,
    /// Bubble, merge, quick
    Sorting,
}

/// A client scenario writing to a sink
type Scenario = fn(&mut dyn Write) -> io::Result<()>;

impl Demo {
    /// Titles and scenarios selected by this choice
    fn scenarios(self) -> Vec<(&'static str, Scenario)> {
        let navigation: (&'static str, Scenario) = ("Navigation app", navigation::run_client);
        let payment: (&'static str, Scenario) = ("Payment system", payment::run_client);
        let sorting: (&'static str, Scenario) = ("Sorting application", sorting::run_client);
        match self {
            Self::All => vec![navigation, payment, sorting],
            Self::Navigation => vec![navigation],
            Self::Payment => vec![payment],
            Self::Sorting => vec![sorting],
        }
    }
}

/// Run the scenarios chosen by `args` against `out`
fn run(args: &Args, out: &mut dyn Write) -> io::Result<()> {
    for (title, scenario) in args.demo.scenarios() {
        if args.headers {
            writeln!(out, "{}", title.green().bold())?;
        }
        tracing::info!(scenario = title, "running");
        scenario(out)?;
    }
    Ok(())
}

/// Parse arguments, install the stderr logger and run the selected demos
fn main() -> io::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush()
}
