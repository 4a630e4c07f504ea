/// Phase of a round, as seen by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing played yet.
    #[default]
    Ready,
    /// A round is running.
    Playing,
    /// The round ended; waiting for a restart.
    Done,
}

/// Flash shown after a pick until the next question is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Right,
    Wrong,
}

/// Why a round reached `Phase::Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every entry in the bank was dealt.
    Exhausted,
    /// The countdown reached zero.
    TimeUp,
}

/// One answered question in the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub prompt: String,
    pub answer: String,
    pub picked: String,
    pub correct: bool,
}
