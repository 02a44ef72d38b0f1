use std::io::{self, Write};

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};

use primer::{Catalog, PrimerError, RunConfig, Runner};

#[derive(Parser)]
#[command(author, version, about = "Runnable lessons on language fundamentals")]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run lessons by id, or every lesson when none are given
    Run {
        lessons: Vec<String>,
        /// Print a `== title ==` line before each lesson
        #[arg(long)]
        headers: bool,
    },
    /// List lesson ids and titles
    List,
}

fn main() -> Result<(), PrimerError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = Catalog::standard();
    match args.command.unwrap_or(Command::Run {
        lessons: Vec::new(),
        headers: false,
    }) {
        Command::Run { lessons, headers } => {
            let selected = catalog.select(&lessons)?;
            let config = if headers {
                RunConfig::with_headers()
            } else {
                RunConfig::default()
            };
            let mut runner = Runner::stdout(config);
            let written = runner.run_lessons(selected)?;
            debug!("wrote {written} steps");
            Ok(())
        }
        Command::List => {
            let mut out = io::stdout().lock();
            for lesson in catalog.iter() {
                writeln!(out, "{}  {}", lesson.id, lesson.title)?;
            }
            out.flush()?;
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
