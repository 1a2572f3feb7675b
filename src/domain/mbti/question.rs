//! Questionnaire layout: question identifiers, preference letters,
//! dimensions and the scoring table that binds them together.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Number of questions in the assessment.
pub const QUESTION_COUNT: u8 = 20;

/// Lowest point on the Likert scale.
pub const SCALE_MIN: i64 = 1;

/// Highest point on the Likert scale.
pub const SCALE_MAX: i64 = 5;

/// Midpoint of the scale, used for unanswered reverse-keyed questions.
pub const NEUTRAL_ANSWER: i64 = 3;

/// Value used for unanswered direct-keyed questions.
pub const DIRECT_DEFAULT: i64 = 0;

/// Reverse-keyed answers are mirrored around the scale: `6 - value`.
const REVERSE_PIVOT: i64 = SCALE_MIN + SCALE_MAX;

/// Identifier of one questionnaire item, `q1` through `q20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct QuestionId(u8);

impl QuestionId {
    /// Creates a question id, rejecting numbers outside 1..=20.
    pub fn new(number: u8) -> Result<Self, ValidationError> {
        if number == 0 || number > QUESTION_COUNT {
            return Err(ValidationError::out_of_range(
                "question",
                1,
                i32::from(QUESTION_COUNT),
                i32::from(number),
            ));
        }
        Ok(Self(number))
    }

    /// Returns the question number (1-based).
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Returns the form key, e.g. `"q7"`.
    pub fn key(&self) -> String {
        format!("q{}", self.0)
    }

    /// Iterates over all question ids in order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT).map(QuestionId)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.key()
    }
}

/// One of the eight preference letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Preference {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Preference {
    /// Returns the single-letter code.
    pub fn letter(&self) -> char {
        match self {
            Preference::E => 'E',
            Preference::I => 'I',
            Preference::S => 'S',
            Preference::N => 'N',
            Preference::T => 'T',
            Preference::F => 'F',
            Preference::J => 'J',
            Preference::P => 'P',
        }
    }

    /// Parses an uppercase or lowercase letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'E' => Some(Preference::E),
            'I' => Some(Preference::I),
            'S' => Some(Preference::S),
            'N' => Some(Preference::N),
            'T' => Some(Preference::T),
            'F' => Some(Preference::F),
            'J' => Some(Preference::J),
            'P' => Some(Preference::P),
            _ => None,
        }
    }

    /// Returns the dimension this letter belongs to.
    pub fn dimension(&self) -> Dimension {
        match self {
            Preference::E | Preference::I => Dimension::ExtraversionIntroversion,
            Preference::S | Preference::N => Dimension::SensingIntuition,
            Preference::T | Preference::F => Dimension::ThinkingFeeling,
            Preference::J | Preference::P => Dimension::JudgingPerceiving,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The four opposing preference pairs, in type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ExtraversionIntroversion,
    SensingIntuition,
    ThinkingFeeling,
    JudgingPerceiving,
}

impl Dimension {
    /// Returns all dimensions in type-code order.
    pub fn all() -> &'static [Dimension; 4] {
        &[
            Dimension::ExtraversionIntroversion,
            Dimension::SensingIntuition,
            Dimension::ThinkingFeeling,
            Dimension::JudgingPerceiving,
        ]
    }

    /// Position of this dimension's letter within a type code.
    pub fn position(&self) -> usize {
        match self {
            Dimension::ExtraversionIntroversion => 0,
            Dimension::SensingIntuition => 1,
            Dimension::ThinkingFeeling => 2,
            Dimension::JudgingPerceiving => 3,
        }
    }

    /// The first-listed letter, fed by direct-keyed questions. Wins ties.
    pub fn direct(&self) -> Preference {
        match self {
            Dimension::ExtraversionIntroversion => Preference::E,
            Dimension::SensingIntuition => Preference::S,
            Dimension::ThinkingFeeling => Preference::T,
            Dimension::JudgingPerceiving => Preference::J,
        }
    }

    /// The second-listed letter, fed by reverse-keyed questions.
    pub fn reverse(&self) -> Preference {
        match self {
            Dimension::ExtraversionIntroversion => Preference::I,
            Dimension::SensingIntuition => Preference::N,
            Dimension::ThinkingFeeling => Preference::F,
            Dimension::JudgingPerceiving => Preference::P,
        }
    }

    /// Returns the pair code, e.g. `"E/I"`.
    pub fn code(&self) -> String {
        format!("{}/{}", self.direct(), self.reverse())
    }
}

/// How an answer feeds its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Keying {
    /// Summed as-is into the first-listed letter.
    Direct,
    /// Summed as `6 - value` into the second-listed letter.
    Reverse,
}

impl Keying {
    /// Value substituted when the answer is missing or not an integer.
    pub fn default_value(&self) -> i64 {
        match self {
            Keying::Direct => DIRECT_DEFAULT,
            Keying::Reverse => NEUTRAL_ANSWER,
        }
    }

    /// Contribution of an answer to its letter's accumulator.
    ///
    /// Saturates instead of overflowing for extreme out-of-scale values.
    pub fn contribution(&self, value: Option<i64>) -> i64 {
        let value = value.unwrap_or_else(|| self.default_value());
        match self {
            Keying::Direct => value,
            Keying::Reverse => REVERSE_PIVOT.saturating_sub(value),
        }
    }
}

/// Question-to-dimension binding for one preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub dimension: Dimension,
    pub direct_questions: [QuestionId; 3],
    pub reverse_questions: [QuestionId; 2],
}

const fn rule(dimension: Dimension, direct: [u8; 3], reverse: [u8; 2]) -> ScoringRule {
    ScoringRule {
        dimension,
        direct_questions: [
            QuestionId(direct[0]),
            QuestionId(direct[1]),
            QuestionId(direct[2]),
        ],
        reverse_questions: [QuestionId(reverse[0]), QuestionId(reverse[1])],
    }
}

/// The fixed scoring table, in type-code order.
pub const SCORING_TABLE: [ScoringRule; 4] = [
    rule(Dimension::ExtraversionIntroversion, [1, 3, 5], [2, 4]),
    rule(Dimension::SensingIntuition, [6, 8, 10], [7, 9]),
    rule(Dimension::ThinkingFeeling, [11, 13, 15], [12, 14]),
    rule(Dimension::JudgingPerceiving, [16, 18, 20], [17, 19]),
];

/// Layout of a single questionnaire item, as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDescriptor {
    pub id: QuestionId,
    pub dimension: Dimension,
    pub keyed_to: Preference,
    pub keying: Keying,
}

/// Returns the descriptors of all 20 questions, ordered by id.
pub fn questionnaire() -> Vec<QuestionDescriptor> {
    let mut items: Vec<QuestionDescriptor> = SCORING_TABLE
        .iter()
        .flat_map(|rule| {
            let direct = rule.direct_questions.iter().map(move |id| QuestionDescriptor {
                id: *id,
                dimension: rule.dimension,
                keyed_to: rule.dimension.direct(),
                keying: Keying::Direct,
            });
            let reverse = rule.reverse_questions.iter().map(move |id| QuestionDescriptor {
                id: *id,
                dimension: rule.dimension,
                keyed_to: rule.dimension.reverse(),
                keying: Keying::Reverse,
            });
            direct.chain(reverse)
        })
        .collect();
    items.sort_by_key(|item| item.id);
    items
}
