use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use permis_quiz::{Quiz, Screen};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,

    /// Screen to open first
    #[arg(short, long, value_enum, default_value_t = Mode::Home)]
    mode: Mode,

    /// Seed for reproducible question draws and option order
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, value_name = "path")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Home,
    Quiz,
    Revision,
}

impl From<Mode> for Screen {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Home => Screen::Home,
            Mode::Quiz => Screen::Quiz,
            Mode::Revision => Screen::Revision,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    tracing::info!(questions = %args.questions.display(), seed = ?args.seed, "starting");

    let quiz = Quiz::from_json(&args.questions, args.seed)?.starting_on(args.mode.into());
    quiz.run()?;

    Ok(())
}

/// The terminal belongs to the UI, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_line_number(true)
        .with_target(false)
        .init();

    Ok(())
}
