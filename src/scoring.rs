// src/scoring.rs
use crate::core::types::MatchResult;

pub const REWARD_EXACT: f32 = 1.0;
pub const REWARD_PARTIAL: f32 = 0.5;
pub const REWARD_VALID_UNMATCHED: f32 = 0.1;
pub const REWARD_FAILURE: f32 = 0.0;

/// Scored outcome plus the meter name that earned it, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub value: f32,
    pub matched: Option<String>,
}

/// Maps a match result to the fixed reward gradient: exact conformance >
/// partial conformance > valid-but-wrong-meter text > unparseable text.
/// The four cases are mutually exclusive.
pub fn score(requested: &str, result: &MatchResult) -> Reward {
    if result.observed.iter().all(|pada| pada.is_empty()) {
        return Reward {
            value: REWARD_FAILURE,
            matched: None,
        };
    }
    if result.exact.contains(requested) {
        Reward {
            value: REWARD_EXACT,
            matched: Some(requested.to_string()),
        }
    } else if result.partial.contains(requested) {
        Reward {
            value: REWARD_PARTIAL,
            matched: Some(requested.to_string()),
        }
    } else {
        Reward {
            value: REWARD_VALID_UNMATCHED,
            matched: None,
        }
    }
}
