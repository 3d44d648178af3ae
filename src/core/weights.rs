// src/core/weights.rs
use crate::core::syllabify::{
    is_consonant, is_independent_vowel, is_vowel_sign, ANUSVARA, VIRAMA, VISARGA,
};
use crate::core::types::{Syllable, Token, Weight, WeightPattern};

/// Phonological breakdown of one syllable, used only for weighing.
struct Shape {
    /// Consonants between the previous vowel and this syllable's vowel.
    onset: usize,
    /// Consonants after the vowel (closed syllables at pada end).
    coda: usize,
    long_vowel: bool,
    nasal_or_visarga: bool,
}

fn shape(syllable: &str) -> Shape {
    let mut onset = 0;
    let mut coda = 0;
    let mut long_vowel = false;
    let mut nasal_or_visarga = false;
    let mut seen_nucleus = false;

    let chars: Vec<char> = syllable.chars().filter(|&c| is_metrical(c)).collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_consonant(c) {
            if seen_nucleus {
                coda += 1;
                i += 1;
                if i < chars.len() && chars[i] == VIRAMA {
                    i += 1;
                }
            } else {
                onset += 1;
                i += 1;
                if i < chars.len() && chars[i] == VIRAMA {
                    i += 1; // still inside the cluster
                    continue;
                }
                // This consonant bears the nucleus: inherent 'a' or a sign.
                seen_nucleus = true;
                if i < chars.len() && is_vowel_sign(chars[i]) {
                    long_vowel = is_long_sign(chars[i]);
                    i += 1;
                }
            }
        } else if is_independent_vowel(c) {
            seen_nucleus = true;
            long_vowel = is_long_vowel(c);
            i += 1;
        } else {
            if c == ANUSVARA || c == VISARGA {
                nasal_or_visarga = true;
            }
            i += 1;
        }
    }

    Shape {
        onset,
        coda,
        long_vowel,
        nasal_or_visarga,
    }
}

fn is_metrical(c: char) -> bool {
    is_consonant(c)
        || is_independent_vowel(c)
        || is_vowel_sign(c)
        || matches!(c, VIRAMA | ANUSVARA | VISARGA)
}

fn is_long_vowel(c: char) -> bool {
    matches!(c, 'आ' | 'ई' | 'ऊ' | 'ॠ' | 'ॡ' | 'ए' | 'ऐ' | 'ओ' | 'औ')
}

fn is_long_sign(c: char) -> bool {
    matches!(
        c,
        '\u{093e}' | '\u{0940}' | '\u{0942}' | '\u{0944}' | '\u{0963}'
            | '\u{0947}' | '\u{0948}' | '\u{094b}' | '\u{094c}'
    )
}

/// Groups syllables into padas, dropping the break markers.
pub fn group_padas(tokens: &[Token]) -> Vec<Vec<&Syllable>> {
    let mut padas: Vec<Vec<&Syllable>> = Vec::new();
    let mut current: Vec<&Syllable> = Vec::new();
    for token in tokens {
        match token {
            Token::Akshara(s) => current.push(s),
            Token::PadaBreak => {
                if !current.is_empty() {
                    padas.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        padas.push(current);
    }
    padas
}

/// Assigns laghu/guru weights, one per syllable, grouped per pada.
///
/// Precedence: long vowel or diphthong => guru; short vowel followed by two
/// or more consonants before the next vowel (own coda plus the next
/// syllable's onset) => guru ("heavy by position"); anusvara or visarga =>
/// guru; otherwise laghu. The final syllable of a pada gets its computed
/// weight here; anceps tolerance is the matcher's job.
pub fn classify(tokens: &[Token]) -> WeightPattern {
    group_padas(tokens)
        .iter()
        .map(|pada| {
            let shapes: Vec<Shape> = pada.iter().map(|s| shape(&s.text)).collect();
            shapes
                .iter()
                .enumerate()
                .map(|(j, s)| {
                    let next_onset = shapes.get(j + 1).map_or(0, |n| n.onset);
                    if s.long_vowel
                        || s.nasal_or_visarga
                        || s.coda + next_onset >= 2
                    {
                        Weight::Guru
                    } else {
                        Weight::Laghu
                    }
                })
                .collect()
        })
        .collect()
}
