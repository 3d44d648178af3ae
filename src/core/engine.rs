// src/core/engine.rs
use crate::core::registry::MeterRegistry;
use crate::core::types::{MatchResult, Token, Verification};
use crate::core::{matcher, syllabify::syllabify, weights};
use crate::scoring;
use crate::{ChandasError, Result};

/// The verification pipeline: syllabify -> classify -> match -> score.
///
/// The engine owns an immutable registry and is safe to share across
/// parallel verification calls; every call is pure and synchronous.
pub struct ChandasEngine {
    registry: MeterRegistry,
}

impl ChandasEngine {
    pub fn new() -> Self {
        Self {
            registry: MeterRegistry::builtin(),
        }
    }

    /// Builds the engine over a caller-supplied catalog, e.g. a mini
    /// registry in tests.
    pub fn with_registry(registry: MeterRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MeterRegistry {
        &self.registry
    }

    /// Identifies the meter(s) of a verse without scoring it.
    pub fn identify(&self, text: &str) -> Result<MatchResult> {
        let tokens = syllabify(text)?;
        let syllables = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Akshara(s) => Some(s.clone()),
                Token::PadaBreak => None,
            })
            .collect();
        let observed = weights::classify(&tokens);
        Ok(matcher::identify(&self.registry, observed, syllables))
    }

    /// Verifies a verse against a requested meter and grades it.
    ///
    /// An unknown meter name is a bad request and surfaces as
    /// `ChandasError::UnknownMeter`; unparseable text is the documented
    /// worst case and comes back as a structured record with reward 0.0.
    #[tracing::instrument(skip(self, text, topic))]
    pub fn verify(&self, text: &str, meter: &str, topic: Option<&str>) -> Result<Verification> {
        let template = self
            .registry
            .lookup(meter)
            .ok_or_else(|| ChandasError::UnknownMeter(meter.to_string()))?;
        let requested = template.name.clone();

        let result = match self.identify(text) {
            Ok(result) => result,
            Err(ChandasError::Syllabification) => {
                tracing::debug!(meter = %requested, "unparseable verse, reward 0.0");
                return Ok(failure_record(topic));
            }
            Err(e) => return Err(e),
        };

        let reward = scoring::score(&requested, &result);
        tracing::debug!(meter = %requested, reward = reward.value, "verse verified");

        Ok(Verification {
            reward: reward.value,
            is_correct: reward.value == scoring::REWARD_EXACT,
            exact: result.exact.clone(),
            partial: result.partial.clone(),
            syllables: result.syllables.iter().map(|s| s.text.clone()).collect(),
            weights: result.observed.iter().flatten().copied().collect(),
            pattern: result.pattern_string(),
            topic: topic.map(|t| t.to_string()),
        })
    }
}

impl Default for ChandasEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_record(topic: Option<&str>) -> Verification {
    Verification {
        reward: scoring::REWARD_FAILURE,
        is_correct: false,
        exact: Default::default(),
        partial: Default::default(),
        syllables: vec![],
        weights: vec![],
        pattern: String::new(),
        topic: topic.map(|t| t.to_string()),
    }
}
