mod entry;
mod phase;
mod question;

pub use entry::Entry;
pub use phase::{AnswerRecord, EndReason, Feedback, Phase};
pub use question::Question;
