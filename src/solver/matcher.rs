//! Pattern matching of code sequences against words
//!
//! A slot's code sequence and the current rubric together form a pattern:
//! rubric-known codes demand their letter, unknown codes capture a fresh
//! letter on first occurrence and demand the captured letter on repeats.
//! Captures follow the strict bijection: a fresh capture may not reuse a
//! letter held by a rubric value or by a different capture in the same word.
//! Matches are anchored at both ends; a word fits only if every position
//! agrees.

use crate::core::{Code, Rubric, Word};
use crate::dictionary::{Dictionary, WordId};

/// Does `word` fit the pattern formed by `codes` under `rubric`?
///
/// A fully known sequence (every code in the rubric) is not a special case;
/// the pattern is simply concrete at every position.
///
/// # Examples
/// ```
/// use codeword_solver::core::{Code, Rubric, Word};
/// use codeword_solver::solver::word_fits;
///
/// let codes: Vec<Code> = [1, 2, 3, 1].iter().map(|&v| Code::new(v).unwrap()).collect();
/// let rubric = Rubric::new();
///
/// // Repeated code 1 demands a repeated letter
/// assert!(word_fits(&codes, &rubric, &Word::new("aida").unwrap()));
/// assert!(!word_fits(&codes, &rubric, &Word::new("zeta").unwrap()));
/// ```
#[must_use]
pub fn word_fits(codes: &[Code], rubric: &Rubric, word: &Word) -> bool {
    if word.len() != codes.len() {
        return false;
    }

    // Letters captured so far for codes the rubric does not know yet,
    // plus the bitmask of every letter taken (rubric values and captures).
    let mut captured: [Option<u8>; 26] = [None; 26];
    let mut taken = rubric.used_mask();

    for (&code, &letter) in codes.iter().zip(word.bytes()) {
        if let Some(required) = rubric.get(code) {
            if letter != required {
                return false;
            }
            continue;
        }

        match captured[code.index()] {
            // Repeated unknown code: must repeat the captured letter
            Some(previous) => {
                if letter != previous {
                    return false;
                }
            }
            // First occurrence: capture any letter not already taken
            None => {
                let bit = 1u32 << (letter - b'a');
                if taken & bit != 0 {
                    return false;
                }
                captured[code.index()] = Some(letter);
                taken |= bit;
            }
        }
    }

    true
}

/// Filter a candidate pool down to the words that fit `codes` under `rubric`
///
/// Pool order is preserved. Returns an empty vector when nothing matches;
/// callers treat that the same as any other computed result.
#[must_use]
pub fn filter_pool(
    codes: &[Code],
    rubric: &Rubric,
    dictionary: &Dictionary,
    pool: &[WordId],
) -> Vec<WordId> {
    pool.iter()
        .copied()
        .filter(|&id| word_fits(codes, rubric, dictionary.word(id)))
        .collect()
}
