//! asciify CLI - Convert images to ASCII art

mod app;
mod args;

use app::is_affirmative;
use args::Args;
use asciify::{AsciiError, supports_ansi_color};
use clap::Parser;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), AsciiError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    app::run(&args, &mut stdout.lock(), supports_ansi_color, ask_yes_no)
}

/// Prompt on stdout and read one answer line from stdin
fn ask_yes_no(question: &str) -> io::Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{question}")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
