// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Metrical weight of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weight {
    /// Light (short) syllable.
    Laghu,
    /// Heavy (long) syllable.
    Guru,
}

impl Weight {
    pub fn letter(self) -> char {
        match self {
            Weight::Laghu => 'L',
            Weight::Guru => 'G',
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One pronounceable unit of the input text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Surface text, e.g. "र्मो".
    pub text: String,
    /// Position within the verse, counting syllables only.
    pub index: usize,
    /// Zero-based pada (line) index.
    pub line: usize,
}

/// Syllabifier output: syllables interleaved with pada-boundary markers.
/// Markers are kept for display but carry no weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Akshara(Syllable),
    PadaBreak,
}

/// Observed weight sequence, one inner vec per pada.
pub type WeightPattern = Vec<Vec<Weight>>;

/// Classification of a verse against the registry. Membership is all that
/// matters in the two name sets; insertion order is irrelevant.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub exact: BTreeSet<String>,
    pub partial: BTreeSet<String>,
    pub observed: WeightPattern,
    pub syllables: Vec<Syllable>,
}

impl MatchResult {
    /// Renders the observed pattern as L/G letters, one pada per line.
    pub fn pattern_string(&self) -> String {
        self.observed
            .iter()
            .map(|pada| pada.iter().map(|w| w.letter()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The structured record handed back to the reward/grading collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    /// Graded reward in [0, 1].
    pub reward: f32,
    /// True iff reward == 1.0.
    pub is_correct: bool,
    pub exact: BTreeSet<String>,
    pub partial: BTreeSet<String>,
    /// Surface texts of the syllables, in order, markers excluded.
    pub syllables: Vec<String>,
    /// One weight per syllable.
    pub weights: Vec<Weight>,
    /// L/G letters per pada, newline-separated.
    pub pattern: String,
    /// Task tag passed through untouched (topic/difficulty).
    pub topic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_letters() {
        assert_eq!(Weight::Laghu.letter(), 'L');
        assert_eq!(Weight::Guru.to_string(), "G");
    }

    #[test]
    fn pattern_string_joins_padas_with_newlines() {
        let result = MatchResult {
            exact: BTreeSet::new(),
            partial: BTreeSet::new(),
            observed: vec![
                vec![Weight::Laghu, Weight::Guru],
                vec![Weight::Guru, Weight::Guru],
            ],
            syllables: vec![],
        };
        assert_eq!(result.pattern_string(), "LG\nGG");
    }
}
