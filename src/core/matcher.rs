// src/core/matcher.rs
use crate::core::registry::{MeterRegistry, MeterTemplate};
use crate::core::types::{MatchResult, Syllable, WeightPattern};
use std::collections::BTreeSet;

enum Grade {
    Exact,
    Partial,
    None,
}

/// Compares an observed weight pattern against every registry template.
///
/// A template is only considered when pada count and per-pada syllable
/// counts line up. The final position of each pada is metrically
/// indifferent and always matches. Exact means every non-final position
/// matches in every pada; partial means at least half of all non-final
/// positions match, or exactly one pada of a multi-pada verse matches in
/// full. A pattern no template accounts for still yields a result with
/// empty name sets.
pub fn identify(
    registry: &MeterRegistry,
    observed: WeightPattern,
    syllables: Vec<Syllable>,
) -> MatchResult {
    let mut exact = BTreeSet::new();
    let mut partial = BTreeSet::new();

    for template in registry.templates() {
        if !shape_matches(template, &observed) {
            continue;
        }
        match grade(template, &observed) {
            Grade::Exact => {
                exact.insert(template.name.clone());
            }
            Grade::Partial => {
                partial.insert(template.name.clone());
            }
            Grade::None => {}
        }
    }

    MatchResult {
        exact,
        partial,
        observed,
        syllables,
    }
}

fn shape_matches(template: &MeterTemplate, observed: &WeightPattern) -> bool {
    template.padas.len() == observed.len()
        && template
            .padas
            .iter()
            .zip(observed)
            .all(|(expected, pada)| expected.len() == pada.len())
}

fn grade(template: &MeterTemplate, observed: &WeightPattern) -> Grade {
    let mut total = 0usize;
    let mut matched = 0usize;
    let mut full_padas = 0usize;

    for (expected, pada) in template.padas.iter().zip(observed) {
        let last = pada.len() - 1;
        let mut pada_ok = true;
        for (pos, (&element, &weight)) in expected.iter().zip(pada).enumerate() {
            if pos == last {
                continue; // final position is anceps
            }
            total += 1;
            if element.accepts(weight) {
                matched += 1;
            } else {
                pada_ok = false;
            }
        }
        if pada_ok {
            full_padas += 1;
        }
    }

    if matched == total {
        Grade::Exact
    } else if matched * 2 >= total || (observed.len() > 1 && full_padas == 1) {
        Grade::Partial
    } else {
        Grade::None
    }
}
