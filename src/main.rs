use std::{error::Error, fs::File, io::{self, BufRead, BufReader}, path::PathBuf};
use clap::Parser;
use atc::Aircraft;
use crate::command_source::LineReader;
use crate::screen::Screen;
use crate::session::Session;

mod command;
mod command_source;
mod screen;
mod session;

/// Fly a plane under the eyes of a panel of dispatchers.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the dispatcher offsets, to replay a flight
    #[arg(long)]
    seed: Option<u64>,

    /// Read commands from a file instead of the terminal
    #[arg(long)]
    script: Option<PathBuf>,

    /// Name of a starting dispatcher (repeatable, the first two are used)
    #[arg(long = "dispatcher")]
    dispatchers: Vec<String>,

    /// Disable colours and screen clearing
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let aircraft = match args.seed {
        Some(seed) => Aircraft::with_seed(seed),
        None => Aircraft::from_os_rng(),
    };
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(
        aircraft,
        LineReader::new(input),
        Screen::new(io::stdout(), !args.no_color),
    );
    let result = session.run(&args.dispatchers);
    println!("The completion of the program.\n");

    result?;
    Ok(())
}
