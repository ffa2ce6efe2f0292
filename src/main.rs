use std::{
    fs,
    io::{self, BufRead},
};

use accumula::{
    error::Stderr,
    interpreter::session::{EntryPoint, Session},
};
use clap::Parser;

/// accumula is a calculator that applies one command per line to a running
/// value and prints the value after each step.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads commands from this file instead of standard input.
    #[arg(short, long)]
    file: Option<String>,

    /// Ignores angle units: trig works in radians and DEG/RAD do nothing.
    #[arg(short, long)]
    blind: bool,

    /// The value the accumulator starts with.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// Pipe mode prints only the final value instead of one value per line.
    #[arg(short, long)]
    pipe_mode: bool,
}

fn main() {
    let args = Args::parse();

    let entry = if args.blind {
        EntryPoint::ModeBlind
    } else {
        EntryPoint::ModeAware
    };
    let mut session = Session::new(entry).with_accumulator(args.start);

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path);
            std::process::exit(1);
        });
        for line in script.lines() {
            step(&mut session, line, args.pipe_mode);
        }
    } else {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => step(&mut session, &line, args.pipe_mode),
                Err(e) => {
                    eprintln!("Failed to read from standard input: {e}");
                    std::process::exit(1);
                },
            }
        }
    }

    if args.pipe_mode {
        println!("{}", session.accumulator());
    }
}

fn step(session: &mut Session, line: &str, quiet: bool) {
    let value = session.feed(line.trim_end_matches('\r'), &mut Stderr);
    if !quiet {
        println!("{value}");
    }
}
