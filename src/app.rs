use std::time::Instant;

use crate::engine::QuizEngine;
use crate::models::Phase;
use crate::round::{Round, RoundConfig};

/// Terminal-side state wrapped around a [`Round`]: option cursor and result
/// scrolling.
pub struct App {
    round: Round,
    selected_option: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(engine: QuizEngine, config: RoundConfig) -> Self {
        Self {
            round: Round::new(engine, config),
            selected_option: 0,
            result_scroll: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.round.question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn start_round(&mut self, now: Instant) {
        self.round.start(now);
        self.selected_option = 0;
        self.result_scroll = 0;
    }

    pub fn submit_answer(&mut self, now: Instant) {
        let Some(option) = self
            .round
            .question()
            .and_then(|q| q.options.get(self.selected_option))
            .cloned()
        else {
            return;
        };
        self.round.pick(&option, now);
    }

    /// Advance timers; resets the cursor whenever a new question is dealt.
    pub fn update(&mut self, now: Instant) {
        let before = self.round.question().map(|q| q.prompt.clone());
        self.round.update(now);
        if self.round.question().map(|q| &q.prompt) != before.as_ref() {
            self.selected_option = 0;
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.round.history().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
