//! Timed rounds.
//!
//! A [`Round`] drives a [`QuizEngine`] through the ready, playing and done
//! phases. Time is passed in by the caller on every call, so the countdown and
//! the reveal pause are plain deadlines checked by [`Round::update`].

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::QuizEngine;
use crate::models::{AnswerRecord, EndReason, Feedback, Phase, Question};

const TICK: Duration = Duration::from_secs(1);

/// Timing of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Length of the countdown. Whole seconds are used.
    pub duration: Duration,
    /// Pause between a pick and the next question.
    pub reveal_delay: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(60),
            reveal_delay: Duration::from_millis(500),
        }
    }
}

pub struct Round<R = StdRng> {
    engine: QuizEngine<R>,
    config: RoundConfig,
    phase: Phase,
    question: Option<Question>,
    score: usize,
    remaining_secs: u64,
    feedback: Option<Feedback>,
    history: Vec<AnswerRecord>,
    end_reason: Option<EndReason>,
    /// Next countdown tick. `None` when no countdown is running.
    next_tick: Option<Instant>,
    /// When the next question gets dealt after a pick.
    reveal_at: Option<Instant>,
}

impl<R: Rng> Round<R> {
    pub fn new(engine: QuizEngine<R>, config: RoundConfig) -> Self {
        Self {
            engine,
            config,
            phase: Phase::Ready,
            question: None,
            score: 0,
            remaining_secs: config.duration.as_secs(),
            feedback: None,
            history: Vec::new(),
            end_reason: None,
            next_tick: None,
            reveal_at: None,
        }
    }

    /// Start a new round, or restart one that is running or finished.
    pub fn start(&mut self, now: Instant) {
        self.engine.reset();
        self.phase = Phase::Playing;
        self.score = 0;
        self.remaining_secs = self.config.duration.as_secs();
        self.feedback = None;
        self.history.clear();
        self.end_reason = None;
        self.reveal_at = None;
        self.next_tick = Some(now + TICK);
        debug!("round started with {}s on the clock", self.remaining_secs);

        if self.remaining_secs == 0 {
            self.expire();
            return;
        }
        self.deal();
    }

    /// Answer the current question with `option`.
    ///
    /// Returns `None` when the pick is ignored: outside of a running round,
    /// or while the previous answer is still being revealed.
    pub fn pick(&mut self, option: &str, now: Instant) -> Option<Feedback> {
        if self.phase != Phase::Playing || self.reveal_at.is_some() {
            return None;
        }
        let question = self.question.as_ref()?;

        let correct = question.is_correct(option);
        let feedback = if correct {
            self.score += 1;
            Feedback::Right
        } else {
            Feedback::Wrong
        };

        self.history.push(AnswerRecord {
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            picked: option.to_string(),
            correct,
        });
        self.feedback = Some(feedback);
        self.reveal_at = Some(now + self.config.reveal_delay);
        Some(feedback)
    }

    /// Fire every countdown tick and reveal that is due at `now`, oldest first.
    pub fn update(&mut self, now: Instant) {
        while self.phase == Phase::Playing {
            let tick_due = self.next_tick.filter(|at| *at <= now);
            let reveal_due = self.reveal_at.filter(|at| *at <= now);

            match (tick_due, reveal_due) {
                (Some(tick), Some(reveal)) if reveal <= tick => self.reveal(),
                (Some(tick), _) => self.tick(tick),
                (None, Some(_)) => self.reveal(),
                (None, None) => break,
            }
        }
    }

    /// End the round because the clock ran out.
    ///
    /// Does nothing unless a round is running, so repeated triggers are safe.
    pub fn expire(&mut self) {
        self.finish(EndReason::TimeUp);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn bank_len(&self) -> usize {
        self.engine.bank().len()
    }

    fn tick(&mut self, at: Instant) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.expire();
        } else {
            self.next_tick = Some(at + TICK);
        }
    }

    fn reveal(&mut self) {
        self.reveal_at = None;
        self.deal();
    }

    fn deal(&mut self) {
        match self.engine.make_question() {
            Some(question) => {
                self.question = Some(question);
                self.feedback = None;
            }
            None => self.finish(EndReason::Exhausted),
        }
    }

    fn finish(&mut self, reason: EndReason) {
        if self.phase != Phase::Playing {
            return;
        }
        self.phase = Phase::Done;
        self.end_reason = Some(reason);
        self.next_tick = None;
        self.reveal_at = None;
        debug!(
            "round over ({:?}): {} of {} correct",
            reason,
            self.score,
            self.history.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::models::Entry;

    fn slang_bank() -> Vec<Entry> {
        vec![
            Entry::new("grass", "informer to the police"),
            Entry::new("gaff", "house or place"),
            Entry::new("quid", "one pound sterling"),
        ]
    }

    fn round_with(config: RoundConfig) -> Round {
        let engine = QuizEngine::with_rng(&slang_bank(), StdRng::seed_from_u64(17)).unwrap();
        Round::new(engine, config)
    }

    fn round() -> Round {
        round_with(RoundConfig::default())
    }

    fn wrong_option(question: &Question) -> String {
        question
            .options
            .iter()
            .find(|o| **o != question.answer)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_new_round_is_ready() {
        let round = round();
        assert_eq!(round.phase(), Phase::Ready);
        assert!(round.question().is_none());
        assert_eq!(round.remaining_secs(), 60);
        assert_eq!(round.bank_len(), 3);
    }

    #[test]
    fn test_pick_before_start_is_ignored() {
        let mut round = round();
        assert_eq!(round.pick("quid", Instant::now()), None);
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn test_start_deals_first_question() {
        let mut round = round();
        round.start(Instant::now());

        assert_eq!(round.phase(), Phase::Playing);
        assert!(round.question().is_some());
        assert_eq!(round.feedback(), None);
    }

    #[test]
    fn test_correct_pick_scores() {
        let mut round = round();
        let now = Instant::now();
        round.start(now);

        let answer = round.question().unwrap().answer.clone();
        assert_eq!(round.pick(&answer, now), Some(Feedback::Right));
        assert_eq!(round.score(), 1);
        assert!(round.history()[0].correct);
    }

    #[test]
    fn test_wrong_pick_does_not_score() {
        let mut round = round();
        let now = Instant::now();
        round.start(now);

        let wrong = wrong_option(round.question().unwrap());
        assert_eq!(round.pick(&wrong, now), Some(Feedback::Wrong));
        assert_eq!(round.score(), 0);
        assert_eq!(round.history()[0].picked, wrong);
        assert!(!round.history()[0].correct);
    }

    #[test]
    fn test_picks_during_reveal_are_ignored() {
        let mut round = round();
        let now = Instant::now();
        round.start(now);

        let answer = round.question().unwrap().answer.clone();
        round.pick(&answer, now);
        assert_eq!(round.pick(&answer, now + Duration::from_millis(100)), None);
        assert_eq!(round.score(), 1);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_reveal_deals_next_question() {
        let mut round = round();
        let now = Instant::now();
        round.start(now);

        let first = round.question().unwrap().answer.clone();
        round.pick(&first, now);

        round.update(now + Duration::from_millis(499));
        assert_eq!(round.question().unwrap().answer, first);
        assert_eq!(round.feedback(), Some(Feedback::Right));

        round.update(now + Duration::from_millis(500));
        assert_ne!(round.question().unwrap().answer, first);
        assert_eq!(round.feedback(), None);
    }

    #[test]
    fn test_exhausting_the_deck_ends_the_round() {
        let mut round = round();
        let mut now = Instant::now();
        round.start(now);

        for _ in 0..3 {
            assert_eq!(round.phase(), Phase::Playing);
            let answer = round.question().unwrap().answer.clone();
            round.pick(&answer, now);
            now += Duration::from_millis(500);
            round.update(now);
        }

        assert_eq!(round.phase(), Phase::Done);
        assert_eq!(round.end_reason(), Some(EndReason::Exhausted));
        assert_eq!(round.score(), 3);

        let mut answered: Vec<_> = round.history().iter().map(|r| r.answer.as_str()).collect();
        answered.sort();
        assert_eq!(answered, ["gaff", "grass", "quid"]);
    }

    #[test]
    fn test_countdown_runs_out() {
        let mut round = round_with(RoundConfig {
            duration: Duration::from_secs(3),
            ..RoundConfig::default()
        });
        let now = Instant::now();
        round.start(now);

        round.update(now + Duration::from_millis(1500));
        assert_eq!(round.remaining_secs(), 2);

        round.update(now + Duration::from_secs(10));
        assert_eq!(round.remaining_secs(), 0);
        assert_eq!(round.phase(), Phase::Done);
        assert_eq!(round.end_reason(), Some(EndReason::TimeUp));
    }

    #[test]
    fn test_expire_is_idempotent() {
        let mut round = round();
        let now = Instant::now();
        round.start(now);

        let answer = round.question().unwrap().answer.clone();
        round.pick(&answer, now);

        round.expire();
        round.expire();
        round.update(now + Duration::from_secs(120));

        assert_eq!(round.phase(), Phase::Done);
        assert_eq!(round.end_reason(), Some(EndReason::TimeUp));
        assert_eq!(round.score(), 1);
        assert_eq!(round.remaining_secs(), 60);
        assert_eq!(round.pick(&answer, now), None);
    }

    #[test]
    fn test_reveal_before_last_tick_wins() {
        let mut round = round_with(RoundConfig {
            duration: Duration::from_secs(1),
            reveal_delay: Duration::from_millis(500),
        });
        let now = Instant::now();
        round.start(now);

        let answer = round.question().unwrap().answer.clone();
        round.pick(&answer, now);
        round.update(now + Duration::from_secs(2));

        // The reveal was due first, so a second question was dealt before time ran out.
        assert_eq!(round.phase(), Phase::Done);
        assert_eq!(round.end_reason(), Some(EndReason::TimeUp));
        assert_ne!(round.question().unwrap().answer, answer);
    }

    #[test]
    fn test_restart_after_done() {
        let mut round = round();
        let now = Instant::now();
        round.start(now);

        let answer = round.question().unwrap().answer.clone();
        round.pick(&answer, now);
        round.expire();

        let later = now + Duration::from_secs(90);
        round.start(later);
        assert_eq!(round.phase(), Phase::Playing);
        assert_eq!(round.score(), 0);
        assert_eq!(round.remaining_secs(), 60);
        assert!(round.history().is_empty());
        assert_eq!(round.end_reason(), None);

        round.update(later + Duration::from_secs(1));
        assert_eq!(round.remaining_secs(), 59);
    }
}
