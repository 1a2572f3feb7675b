//! MBTI personality assessment.
//!
//! A 20-question Likert-scale questionnaire scored into one of sixteen
//! four-letter types. Each of the four preference pairs (E/I, S/N, T/F, J/P)
//! owns five questions: three direct-keyed toward the first letter and two
//! reverse-keyed toward the second. The binding lives in [`SCORING_TABLE`];
//! [`classify`] walks it generically.
//!
//! Everything here is pure and synchronous.

mod answers;
mod classifier;
mod personality_type;
mod question;

pub use answers::{AnswerSet, RawAnswer};
pub use classifier::{classify, score, DimensionScore, ScoreCard};
pub use personality_type::PersonalityType;
pub use question::{
    questionnaire, Dimension, Keying, Preference, QuestionDescriptor, QuestionId, ScoringRule,
    DIRECT_DEFAULT, NEUTRAL_ANSWER, QUESTION_COUNT, SCALE_MAX, SCALE_MIN, SCORING_TABLE,
};
