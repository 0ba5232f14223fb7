//! Questionnaire-to-result scoring engines.
//!
//! Two independent deterministic variants operate over the same normalized
//! record type and never share state:
//!
//! - `preference` - trait/preference quiz: a weighted additive score over
//!   the whole candidate set, highest total wins.
//! - `personality` - personality-axis quiz: a prime-weighted closed-form
//!   hash into the id space.

pub mod personality;
pub mod preference;

pub use personality::{PersonalityAnswers, PersonalityResult};
pub use preference::{Mode, PreferenceAnswers, Recommendation};

use serde::{Deserialize, Serialize};

/// The five personality axes shared by both quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Aggressive,
    Defensive,
    Balanced,
    Speed,
    Special,
}

/// Fixed enumeration order; tallies resolve ties toward the later entry.
pub const TRAIT_ORDER: [Trait; 5] = [
    Trait::Aggressive,
    Trait::Defensive,
    Trait::Balanced,
    Trait::Speed,
    Trait::Special,
];

/// One quiz question, as a UI would render it.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
}

/// One selectable option. `axis` is set for personality-quiz options only.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub axis: Option<Trait>,
}
