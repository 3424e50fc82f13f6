extern crate ansi_term;
extern crate ctrlc;
use ansi_term::Style;
use basic::mach::{Event, Runtime};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run line-numbered BASIC programs. Each file is a separate program;
/// a failing program does not stop the ones after it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print each line number as it executes.
    #[arg(short, long)]
    trace: bool,

    /// Make GOTO to a missing line an error.
    #[arg(short, long)]
    strict_goto: bool,

    /// List each program as parsed before running it.
    #[arg(short, long)]
    list: bool,

    /// Fixed seed for RND.
    #[arg(long)]
    seed: Option<u64>,

    /// Statements executed between interrupt checks.
    #[arg(long, default_value_t = 5000)]
    cycles: usize,

    #[arg(required = true)]
    files: Vec<PathBuf>,
}

pub fn main() -> i32 {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", error);
    }
    let mut failed = false;
    for path in &args.files {
        if !run_file(&args, path, &interrupted) {
            failed = true;
        }
    }
    if failed {
        1
    } else {
        0
    }
}

fn report(message: &str) {
    eprintln!("{}", Style::new().bold().paint(message));
}

fn run_file(args: &Args, path: &Path, interrupted: &AtomicBool) -> bool {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(error) => {
            report(&format!("?{}: {}", path.display(), error));
            return false;
        }
    };
    let mut runtime = Runtime::new();
    runtime.tron(args.trace);
    runtime.strict_goto(args.strict_goto);
    if let Some(seed) = args.seed {
        runtime.seed(seed);
    }
    if let Err(error) = runtime.load(&source) {
        report(&format!("?{}: {}", path.display(), error));
        return false;
    }
    if args.list {
        print!("{}", runtime.program());
    }
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(args.cycles) {
            Event::Stopped => return true,
            Event::Running => {}
            Event::Print(s) => println!("{}", s),
            Event::Device(command) => {
                eprintln!("{}", Style::new().dimmed().paint(command.to_string()));
            }
            Event::Trace(line_number) => {
                eprint!("{}", Style::new().dimmed().paint(format!("[{}]", line_number)));
            }
            Event::Error(error) => {
                report(&format!("?{}: {}", path.display(), error));
                return false;
            }
        }
    }
}
