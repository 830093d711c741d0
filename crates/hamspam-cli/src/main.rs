//! hamspam command line.
//!
//! ```text
//! hamspam <training_file> <eval_file> [stopword_file]
//! ```

mod args;
mod commands;
mod output;

use clap::Parser;

use crate::args::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = commands::run(&cli, &mut stdout.lock()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
