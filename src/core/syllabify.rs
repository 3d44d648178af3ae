// src/core/syllabify.rs
use crate::core::types::{Syllable, Token};
use crate::{ChandasError, Result};

pub(crate) const VIRAMA: char = '\u{094d}';
pub(crate) const ANUSVARA: char = '\u{0902}';
pub(crate) const VISARGA: char = '\u{0903}';
pub(crate) const CANDRABINDU: char = '\u{0901}';
const NUKTA: char = '\u{093c}';
const DANDA: char = '\u{0964}';
const DOUBLE_DANDA: char = '\u{0965}';

pub(crate) fn is_consonant(c: char) -> bool {
    matches!(c, '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095f}')
}

pub(crate) fn is_independent_vowel(c: char) -> bool {
    matches!(c, '\u{0904}'..='\u{0914}' | '\u{0960}' | '\u{0961}')
}

pub(crate) fn is_vowel_sign(c: char) -> bool {
    matches!(c, '\u{093e}'..='\u{094c}' | '\u{0962}' | '\u{0963}')
}

fn is_pada_break(c: char) -> bool {
    c == '\n' || c == DANDA || c == DOUBLE_DANDA
}

/// Splits Devanagari text into syllables, preserving pada boundaries.
///
/// A syllable nucleus is an independent vowel, or a consonant cluster plus
/// its (possibly inherent) vowel; conjunct clusters attach forward to the
/// nucleus they precede. Anusvara, visarga and candrabindu attach to the
/// syllable they modify. Newlines and danda punctuation close the current
/// pada and are emitted as `Token::PadaBreak`. A trailing virama-consonant
/// with no following vowel attaches back to the preceding syllable.
///
/// Example: "धर्मो रक्षति" splits as ["ध", "र्मो", "र", "क्ष", "ति"].
pub fn syllabify(text: &str) -> Result<Vec<Token>> {
    // Keep only the characters that carry metrical information. Spaces,
    // accents and foreign characters are ignored, like the upstream data.
    let chars: Vec<char> = text
        .chars()
        .filter(|&c| {
            is_consonant(c)
                || is_independent_vowel(c)
                || is_vowel_sign(c)
                || matches!(c, VIRAMA | NUKTA | ANUSVARA | VISARGA | CANDRABINDU)
                || is_pada_break(c)
        })
        .collect();

    let mut tokens: Vec<Token> = Vec::new();
    let mut line = 0usize;
    let mut index = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];

        if is_pada_break(c) {
            // Collapse runs of breaks; a pada only closes once.
            if matches!(tokens.last(), Some(Token::Akshara(_))) {
                tokens.push(Token::PadaBreak);
                line += 1;
            }
            i += 1;
            continue;
        }

        if is_independent_vowel(c) {
            let mut syl = String::from(c);
            i += 1;
            i = consume_modifiers(&chars, i, &mut syl);
            tokens.push(Token::Akshara(Syllable { text: syl, index, line }));
            index += 1;
            continue;
        }

        if is_consonant(c) {
            let mut syl = String::new();
            let mut coda = false;
            loop {
                syl.push(chars[i]);
                i += 1;
                if i < chars.len() && chars[i] == NUKTA {
                    syl.push(NUKTA);
                    i += 1;
                }
                if i < chars.len() && chars[i] == VIRAMA {
                    syl.push(VIRAMA);
                    i += 1;
                    if i < chars.len() && is_consonant(chars[i]) {
                        continue; // conjunct keeps growing toward its nucleus
                    }
                    if i < chars.len() && is_independent_vowel(chars[i]) {
                        syl.push(chars[i]);
                        i += 1;
                        break;
                    }
                    // No vowel follows: this is a closed-syllable coda.
                    coda = true;
                    break;
                }
                break; // inherent vowel, unless a sign follows
            }
            if coda {
                i = consume_modifiers(&chars, i, &mut syl);
                match tokens.last_mut() {
                    Some(Token::Akshara(prev)) => prev.text.push_str(&syl),
                    // A coda with no open syllable before it is not a syllable.
                    _ => return Err(ChandasError::Syllabification),
                }
                continue;
            }
            if i < chars.len() && is_vowel_sign(chars[i]) {
                syl.push(chars[i]);
                i += 1;
            }
            i = consume_modifiers(&chars, i, &mut syl);
            tokens.push(Token::Akshara(Syllable { text: syl, index, line }));
            index += 1;
            continue;
        }

        // Stray sign with no base (matra, virama, anusvara...): drop it.
        i += 1;
    }

    if index == 0 {
        return Err(ChandasError::Syllabification);
    }
    Ok(tokens)
}

fn consume_modifiers(chars: &[char], mut i: usize, syl: &mut String) -> usize {
    while i < chars.len() && matches!(chars[i], ANUSVARA | VISARGA | CANDRABINDU) {
        syl.push(chars[i]);
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Akshara(s) => Some(s.text.clone()),
                Token::PadaBreak => None,
            })
            .collect()
    }

    #[test]
    fn splits_conjuncts_toward_their_nucleus() {
        let tokens = syllabify("धर्मो रक्षति").unwrap();
        assert_eq!(texts(&tokens), vec!["ध", "र्मो", "र", "क्ष", "ति"]);
    }

    #[test]
    fn trailing_virama_attaches_to_preceding_syllable() {
        let tokens = syllabify("पात्रताम्").unwrap();
        assert_eq!(texts(&tokens), vec!["पा", "त्र", "ताम्"]);
    }

    #[test]
    fn danda_and_newline_close_padas() {
        let tokens = syllabify("सत्यं वद।\nधर्मं चर॥").unwrap();
        let breaks = tokens
            .iter()
            .filter(|t| matches!(t, Token::PadaBreak))
            .count();
        assert_eq!(breaks, 2);
        let lines: Vec<usize> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Akshara(s) => Some(s.line),
                Token::PadaBreak => None,
            })
            .collect();
        assert_eq!(lines, vec![0, 0, 0, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn anusvara_and_visarga_stay_on_their_syllable() {
        let tokens = syllabify("नमः शिवं").unwrap();
        assert_eq!(texts(&tokens), vec!["न", "मः", "शि", "वं"]);
    }

    #[test]
    fn syllable_indices_are_sequential_across_padas() {
        let tokens = syllabify("अथ\nयोगः").unwrap();
        let indices: Vec<usize> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Akshara(s) => Some(s.index),
                Token::PadaBreak => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            syllabify(""),
            Err(ChandasError::Syllabification)
        ));
    }

    #[test]
    fn input_without_devanagari_is_an_error() {
        assert!(matches!(
            syllabify("hello world 123"),
            Err(ChandasError::Syllabification)
        ));
    }

    #[test]
    fn lone_coda_is_an_error() {
        assert!(matches!(
            syllabify("क्"),
            Err(ChandasError::Syllabification)
        ));
    }

    #[test]
    fn independent_vowel_starts_its_own_syllable() {
        let tokens = syllabify("इति आह").unwrap();
        assert_eq!(texts(&tokens), vec!["इ", "ति", "आ", "ह"]);
    }
}
