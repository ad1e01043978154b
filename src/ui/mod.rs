use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Severity of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

/// Destination for everything the library prints.
///
/// Filtering by verbosity happens in `ExecutionPolicy`; a sink only formats.
pub trait OutputSink: Send + Sync {
    fn message(&self, level: Level, msg: &str);

    /// Plain, uncolored command echo on stdout.
    fn command(&self, line: &str);
}

/// Writes to the terminal with colored severity glyphs.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn message(&self, level: Level, msg: &str) {
        match level {
            Level::Debug => debug(msg),
            Level::Info => info(msg),
            Level::Success => success(msg),
            Level::Warning => warning(msg),
            Level::Error => error(msg),
        }
    }

    fn command(&self, line: &str) {
        println!("{}", line);
    }
}

/// Honor NO_COLOR before anything is printed.
pub fn init_colors() {
    if std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

pub fn header(title: &str) {
    println!("\n{}", title.bold().underline());
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

pub fn debug(msg: &str) {
    println!("{} {}", "·".bright_black(), msg.bright_black());
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn keyval(key: &str, val: &str) {
    println!("{}: {}", key.bold(), val);
}

/// Answer to a yes/no/always question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Always,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Self::Yes),
            "n" | "no" => Some(Self::No),
            "a" | "always" => Some(Self::Always),
            _ => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes | Self::Always)
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Ask until a valid answer is given. A closed or broken stdin counts as "no".
pub fn prompt_yes_no_always(question: &str) -> Choice {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    prompt_loop(question, &mut lines)
}

fn prompt_loop(question: &str, input: &mut impl BufRead) -> Choice {
    loop {
        print!(
            "{} {} [y/n/A] (Ctrl-C to abort): ",
            "?".yellow().bold(),
            question
        );

        if let Err(e) = io::stdout().flush() {
            eprintln!("\nWarning: Failed to flush terminal: {}", e);
            return Choice::No;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return Choice::No,
            Ok(_) => {
                if let Some(choice) = Choice::parse(&line) {
                    return choice;
                }
            }
            Err(e) => {
                eprintln!("\nWarning: Failed to read input: {}", e);
                return Choice::No;
            }
        }
    }
}
