//! # permis-quiz
//!
//! Quiz and revision tool for the vehicle-check part of the French driving
//! license exam. Every question of the bank combines a vehicle check, a
//! road-safety question and a first-aid question.
//!
//! The core is [`QuizSession`]: it builds the answer options, validates
//! selections, keeps score and walks through series of five questions.
//! A terminal front-end is provided on top of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use permis_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", None)?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod quiz;
pub mod revision;
pub mod terminal;
mod ui;

use std::fmt;
use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{load_questions_from_json, parse_questions, LoadError, QuestionBank};
pub use models::{
    ActiveQuestion, Answer, AnswerChoice, Category, ChoiceContent, ChoiceKind, KnowledgeSection,
    PerCategory, Question, Screen, VehicleAnswer, VehicleSection,
};
pub use quiz::{
    CategoryStats, CategoryStatus, NextQuestionOptions, PendingAdvance, QuestionScore,
    QuizSession,
};
pub use revision::RevisionBrowser;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over `questions`, seeded with `seed` when given.
    pub fn new(questions: Vec<Question>, seed: Option<u64>) -> Result<Self, QuizError> {
        let app = App::new(QuestionBank::new(questions), seed).ok_or_else(|| {
            QuizError::Load(LoadError::Empty {
                path: "<memory>".into(),
            })
        })?;
        Ok(Self { app })
    }

    /// Load a quiz from a JSON question bank.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use permis_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json", Some(7)).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions, seed)
    }

    /// Open `screen` first instead of the home menu.
    pub fn starting_on(mut self, screen: Screen) -> Self {
        self.app.open(screen);
        self
    }

    /// Run the quiz in the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.screen {
        Screen::Home => handle_home_input(app, key),
        Screen::Quiz if app.session().show_results() => handle_result_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Revision => handle_revision_input(app, key),
    }
    false
}

fn category_for_digit(c: char) -> Option<Category> {
    let index = c.to_digit(10)?.checked_sub(1)?;
    Category::ORDER.get(index as usize).copied()
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_entry(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_entry(),
        KeyCode::Enter => app.open_selected_entry(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
        KeyCode::Char(' ') => app.toggle_highlighted(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_category(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_category(),
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(category) = category_for_digit(c) {
                app.show_category(category);
            }
        }
        KeyCode::Char('n') => app.random_question(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.restart_series(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_revision_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.revision_previous(),
        KeyCode::Right | KeyCode::Char('l') => app.revision_next(),
        KeyCode::Char('r') => app.revision_random(),
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(category) = category_for_digit(c) {
                app.revision_toggle(category);
            }
        }
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}
