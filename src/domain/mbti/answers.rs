//! Raw questionnaire answers as submitted by a client.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::question::{QuestionId, SCALE_MAX, SCALE_MIN};

/// A single submitted answer before coercion.
///
/// Clients send integers or their string form; anything else is kept so the
/// set can still be scored with defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAnswer {
    /// Coerces the answer to an integer, if it has one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawAnswer::Integer(n) => Some(*n),
            RawAnswer::Text(s) => s.trim().parse().ok(),
            RawAnswer::Other(_) => None,
        }
    }
}

impl From<i64> for RawAnswer {
    fn from(value: i64) -> Self {
        RawAnswer::Integer(value)
    }
}

impl From<i32> for RawAnswer {
    fn from(value: i32) -> Self {
        RawAnswer::Integer(i64::from(value))
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        RawAnswer::Text(value.to_string())
    }
}

impl From<String> for RawAnswer {
    fn from(value: String) -> Self {
        RawAnswer::Text(value)
    }
}

/// Mapping from question key (`"q1"`..`"q20"`) to the submitted answer.
///
/// Keys that are not question ids are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<String, RawAnswer>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the answer for a key.
    pub fn with(mut self, key: impl Into<String>, answer: impl Into<RawAnswer>) -> Self {
        self.insert(key, answer);
        self
    }

    /// Sets the answer for a key, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, answer: impl Into<RawAnswer>) {
        self.answers.insert(key.into(), answer.into());
    }

    /// Returns the integer value for a question, if present and numeric.
    pub fn value_of(&self, question: QuestionId) -> Option<i64> {
        self.answers
            .get(&question.key())
            .and_then(RawAnswer::as_integer)
    }

    /// Questions with no usable integer answer.
    pub fn unanswered(&self) -> Vec<QuestionId> {
        QuestionId::all()
            .filter(|q| self.value_of(*q).is_none())
            .collect()
    }

    /// Answered questions whose value lies outside the 1..=5 scale.
    pub fn out_of_scale(&self) -> Vec<QuestionId> {
        QuestionId::all()
            .filter(|q| {
                self.value_of(*q)
                    .is_some_and(|v| !(SCALE_MIN..=SCALE_MAX).contains(&v))
            })
            .collect()
    }

    /// True when every question has an in-scale integer answer.
    pub fn is_complete(&self) -> bool {
        self.unanswered().is_empty() && self.out_of_scale().is_empty()
    }

    /// Number of stored keys, including non-question keys.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<HashMap<String, RawAnswer>> for AnswerSet {
    fn from(answers: HashMap<String, RawAnswer>) -> Self {
        Self { answers }
    }
}

impl<K: Into<String>, V: Into<RawAnswer>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
