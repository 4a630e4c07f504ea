//! Question dealing.
//!
//! [`QuizEngine`] owns a fixed bank of entries and a per-round deck. Each call
//! to [`QuizEngine::make_question`] pops one entry off the deck, so no term is
//! dealt twice until the next [`QuizEngine::reset`].

use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::models::{Entry, Question};

/// Maximum number of wrong options shown next to the answer.
pub const MAX_DISTRACTORS: usize = 3;

/// Error returned when an engine cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("the quiz bank must contain at least one entry")]
    EmptyBank,
}

/// Deals randomized multiple-choice questions from a bank of entries.
///
/// The engine is generic over its random source. [`QuizEngine::new`] seeds a
/// [`StdRng`] from system entropy; tests pass a seeded generator through
/// [`QuizEngine::with_rng`].
pub struct QuizEngine<R = StdRng> {
    bank: Vec<Entry>,
    deck: Vec<Entry>,
    rng: R,
}

impl QuizEngine<StdRng> {
    /// Build an engine over a copy of `bank` and shuffle the first deck.
    pub fn new(bank: &[Entry]) -> Result<Self, EngineError> {
        Self::with_rng(bank, StdRng::from_entropy())
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(bank: &[Entry], rng: R) -> Result<Self, EngineError> {
        if bank.is_empty() {
            return Err(EngineError::EmptyBank);
        }

        let mut engine = Self {
            bank: bank.to_vec(),
            deck: Vec::with_capacity(bank.len()),
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Replace the deck with a fresh permutation of the whole bank.
    pub fn reset(&mut self) {
        self.deck.clone_from(&self.bank);
        self.deck.shuffle(&mut self.rng);
        debug!("deck reshuffled with {} entries", self.deck.len());
    }

    pub fn has_next(&self) -> bool {
        !self.deck.is_empty()
    }

    /// Entries left in the deck this round.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn bank(&self) -> &[Entry] {
        &self.bank
    }

    /// Deal the next entry as a question.
    ///
    /// Returns `None` once every entry of the bank has been dealt this round.
    pub fn make_question(&mut self) -> Option<Question> {
        let Some(dealt) = self.deck.pop() else {
            debug!("deck exhausted");
            return None;
        };

        let distractors = self.sample_distractors(&dealt, MAX_DISTRACTORS);

        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(dealt.term.clone());
        options.extend(distractors);
        options.shuffle(&mut self.rng);

        Some(Question {
            prompt: dealt.definition,
            answer: dealt.term,
            options,
        })
    }

    /// Pick up to `count` distinct terms other than the dealt one.
    fn sample_distractors(&mut self, dealt: &Entry, count: usize) -> Vec<String> {
        let mut pool: Vec<&Entry> = self
            .bank
            .iter()
            .filter(|entry| entry.term != dealt.term)
            .collect();
        pool.shuffle(&mut self.rng);

        // Banks are expected to have unique terms, but a duplicate must never
        // show up twice among the options.
        let mut seen = HashSet::with_capacity(count);
        pool.into_iter()
            .filter(|entry| seen.insert(entry.term.as_str()))
            .take(count)
            .map(|entry| entry.term.clone())
            .collect()
    }
}
