//! # lexicon-quiz
//!
//! A timed multiple-choice slang quiz for the terminal.
//!
//! The core is [`QuizEngine`], which deals every entry of a bank once per
//! round in random order and dresses each one up as a question with random
//! distractors. [`Round`] layers the countdown, score and reveal pause on top,
//! and [`Game`] runs it all in a terminal UI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lexicon_quiz::{Game, GameError, RoundConfig};
//!
//! fn main() -> Result<(), GameError> {
//!     // Load a bank of term/definition pairs
//!     let game = Game::from_json("bank.json", RoundConfig::default())?;
//!
//!     // Play in the terminal
//!     game.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod engine;
mod models;
pub mod round;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{LoadError, default_bank, load_bank_from_json};
pub use engine::{EngineError, QuizEngine};
pub use models::{AnswerRecord, EndReason, Entry, Feedback, Phase, Question};
pub use round::{Round, RoundConfig};

/// How long the event loop waits for a key before re-checking the clock.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for game operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load the quiz bank: {0}")]
    Load(#[from] LoadError),
    #[error("invalid quiz bank: {0}")]
    Engine(#[from] EngineError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// A game that can be played in the terminal.
pub struct Game {
    app: App,
}

impl Game {
    /// Create a game over `bank`.
    ///
    /// Fails if the bank is empty.
    pub fn new(bank: &[Entry], config: RoundConfig) -> Result<Self, GameError> {
        let engine = QuizEngine::new(bank)?;
        Ok(Self {
            app: App::new(engine, config),
        })
    }

    /// Create a game over the bundled slang bank.
    pub fn with_default_bank(config: RoundConfig) -> Result<Self, GameError> {
        Self::new(&default_bank(), config)
    }

    /// Create a game over a bank read from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lexicon_quiz::{Game, RoundConfig};
    ///
    /// let game = Game::from_json("bank.json", RoundConfig::default()).expect("Failed to load bank");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: RoundConfig) -> Result<Self, GameError> {
        let bank = load_bank_from_json(path)?;
        Self::new(&bank, config)
    }

    /// Take over the terminal and play until the user quits.
    pub fn run(mut self) -> Result<(), GameError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), GameError> {
    loop {
        app.update(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code, Instant::now()) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the game should exit.
fn handle_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match app.phase() {
        Phase::Ready => handle_ready_input(app, key, now),
        Phase::Playing => handle_playing_input(app, key, now),
        Phase::Done => handle_done_input(app, key, now),
    }
    false
}

fn handle_ready_input(app: &mut App, key: KeyCode, now: Instant) {
    if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
        app.start_round(now);
    }
}

fn handle_playing_input(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(now),
        _ => {}
    }
}

fn handle_done_input(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.start_round(now),
        _ => {}
    }
}
