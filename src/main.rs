use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use tokcalc::{interpreter::runner::QUIT, run};
use tracing::{Level, debug, error, info};

/// tokcalc evaluates space separated integer commands such as `5 + 4`,
/// `negate 7` or `halve 9`. Enter `quit` to stop.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a file with one command per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Log every evaluated line to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// A single command to evaluate. Starts an interactive session when
    /// omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
                             .init();

    let result = match (&args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            evaluate_lines(script.lines(), &mut io::stdout(), false)
        },
        (Some(command), false) => writeln!(io::stdout(), "{}", evaluate(command)),
        (None, _) => {
            info!("tokcalc session started");
            let stdin = io::stdin();
            let lines = stdin.lock().lines().map_while(|line| {
                                                line.map_err(|e| error!("Failed to read line: {e}"))
                                                    .ok()
                                            });
            let res = evaluate_lines(lines, &mut io::stdout(), true);
            info!("tokcalc session ended");
            res
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Evaluates one line, logging the exchange at debug level.
fn evaluate(line: &str) -> String {
    let output = run(line);
    debug!(input = line, output = %output, "evaluated");
    output
}

/// Evaluates lines in order, writing each result, until one yields `quit`.
fn evaluate_lines<I, S, W>(lines: I, out: &mut W, prompt: bool) -> io::Result<()>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>,
          W: Write
{
    let mut lines = lines.into_iter();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let output = evaluate(line.as_ref());
        writeln!(out, "{output}")?;
        if output == QUIT {
            return Ok(());
        }
    }
}
