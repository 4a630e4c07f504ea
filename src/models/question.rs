/// A multiple-choice question built from one dealt entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Definition of the dealt entry.
    pub prompt: String,
    /// Term of the dealt entry.
    pub answer: String,
    /// The answer plus up to three distractors, in random order.
    pub options: Vec<String>,
}

impl Question {
    pub fn is_correct(&self, pick: &str) -> bool {
        self.answer == pick
    }

    /// Index of the correct answer within `options`.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| *option == self.answer)
    }
}
