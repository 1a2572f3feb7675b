//! MBTI classifier: scores an answer set against the scoring table.
//!
//! Scoring never fails. Missing or non-numeric answers fall back to the
//! keying default (0 direct, 3 reverse); integers outside the scale are used
//! as-is, with totals saturating at the `i64` bounds. Callers wanting strict
//! input check `AnswerSet::is_complete` first.

use serde::Serialize;

use super::answers::AnswerSet;
use super::personality_type::PersonalityType;
use super::question::{Dimension, Keying, Preference, QuestionId, ScoringRule, SCORING_TABLE};

/// Accumulated totals for one preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Sum for the first-listed letter (E, S, T, J).
    pub direct_total: i64,
    /// Sum for the second-listed letter (I, N, F, P).
    pub reverse_total: i64,
}

impl DimensionScore {
    /// The winning letter. Ties go to the first-listed letter.
    pub fn winner(&self) -> Preference {
        if self.direct_total >= self.reverse_total {
            self.dimension.direct()
        } else {
            self.dimension.reverse()
        }
    }

    /// True when both totals are equal.
    pub fn is_tie(&self) -> bool {
        self.direct_total == self.reverse_total
    }

    /// Total accumulated for the given letter of this pair.
    pub fn total_for(&self, preference: Preference) -> Option<i64> {
        if preference == self.dimension.direct() {
            Some(self.direct_total)
        } else if preference == self.dimension.reverse() {
            Some(self.reverse_total)
        } else {
            None
        }
    }
}

/// Scores for all four dimensions, in type-code order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    scores: [DimensionScore; 4],
}

impl ScoreCard {
    /// Returns the four dimension scores.
    pub fn scores(&self) -> &[DimensionScore; 4] {
        &self.scores
    }

    /// Returns the score of one dimension.
    pub fn get(&self, dimension: Dimension) -> &DimensionScore {
        &self.scores[dimension.position()]
    }

    /// Total accumulated for any of the eight letters.
    pub fn total_for(&self, preference: Preference) -> i64 {
        self.get(preference.dimension())
            .total_for(preference)
            .unwrap_or_default()
    }

    /// The resulting personality type.
    pub fn personality_type(&self) -> PersonalityType {
        PersonalityType::from_winners(self.scores.map(|s| s.winner()))
    }
}

fn accumulate(questions: &[QuestionId], keying: Keying, answers: &AnswerSet) -> i64 {
    questions
        .iter()
        .map(|q| keying.contribution(answers.value_of(*q)))
        .fold(0, i64::saturating_add)
}

fn score_rule(rule: &ScoringRule, answers: &AnswerSet) -> DimensionScore {
    DimensionScore {
        dimension: rule.dimension,
        direct_total: accumulate(&rule.direct_questions, Keying::Direct, answers),
        reverse_total: accumulate(&rule.reverse_questions, Keying::Reverse, answers),
    }
}

/// Scores every dimension of the answer set.
pub fn score(answers: &AnswerSet) -> ScoreCard {
    ScoreCard {
        scores: SCORING_TABLE.map(|rule| score_rule(&rule, answers)),
    }
}

/// Classifies an answer set into a four-letter personality type.
pub fn classify(answers: &AnswerSet) -> PersonalityType {
    score(answers).personality_type()
}
