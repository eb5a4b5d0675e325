//! Code-to-letter assignment ("rubric")
//!
//! A rubric is the partial mapping from codes to letters that the search
//! extends one trial at a time. Two invariants are enforced at assignment
//! time, so a contradictory rubric is unrepresentable:
//!
//! - a code maps to at most one letter
//! - distinct codes never share a letter (the strict, bijective variant)
//!
//! Rubrics are small value types; every search branch owns its own copy.

use super::grid::Code;
use std::fmt;

/// Partial mapping from code to letter
///
/// Backed by a fixed 26-entry table plus a bitmask of letters in use, so
/// lookups and copies are cheap enough to run inside the search loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rubric {
    letters: [Option<u8>; 26],
    used: u32,
}

/// Error type for rubric construction and assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RubricError {
    InvalidCode(u8),
    InvalidLetter(char),
    CodeReassigned { code: Code, old: char, new: char },
    LetterTaken { letter: char, holder: Code },
}

impl fmt::Display for RubricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(value) => {
                write!(f, "Code {value} is out of range, expected 1-26")
            }
            Self::InvalidLetter(letter) => {
                write!(f, "'{letter}' is not a lowercase ASCII letter")
            }
            Self::CodeReassigned { code, old, new } => {
                write!(f, "Code {code} is already '{old}', cannot also be '{new}'")
            }
            Self::LetterTaken { letter, holder } => {
                write!(f, "Letter '{letter}' is already assigned to code {holder}")
            }
        }
    }
}

impl std::error::Error for RubricError {}

impl Rubric {
    /// An empty rubric: solve from scratch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rubric from (code value, letter) hint pairs
    ///
    /// This is the seed-validation gate: a contradictory seed (one code given
    /// two letters, or one letter given to two codes) is rejected here, before
    /// any search starts.
    ///
    /// # Errors
    /// Returns `RubricError` on out-of-range codes, non-letter hints, or
    /// contradictory pairs.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::Rubric;
    ///
    /// let rubric = Rubric::from_pairs([(22, 'o'), (10, 'r'), (3, 'p')]).unwrap();
    /// assert_eq!(rubric.assigned_count(), 3);
    ///
    /// // Code 7 cannot be both 'r' and 's'
    /// assert!(Rubric::from_pairs([(7, 'r'), (7, 's')]).is_err());
    /// ```
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, char)>) -> Result<Self, RubricError> {
        let mut rubric = Self::new();
        for (value, letter) in pairs {
            let code = Code::new(value).ok_or(RubricError::InvalidCode(value))?;
            if !letter.is_ascii_lowercase() {
                return Err(RubricError::InvalidLetter(letter));
            }
            rubric.assign(code, letter as u8)?;
        }
        Ok(rubric)
    }

    /// Assign a letter to a code
    ///
    /// Re-assigning the same letter to the same code is a no-op.
    ///
    /// # Errors
    /// Returns `RubricError` if the code already has a different letter, or
    /// the letter already belongs to a different code.
    pub fn assign(&mut self, code: Code, letter: u8) -> Result<(), RubricError> {
        if !letter.is_ascii_lowercase() {
            return Err(RubricError::InvalidLetter(letter as char));
        }

        if let Some(old) = self.letters[code.index()] {
            if old == letter {
                return Ok(());
            }
            return Err(RubricError::CodeReassigned {
                code,
                old: old as char,
                new: letter as char,
            });
        }

        if self.is_letter_used(letter) {
            let holder = self
                .iter()
                .find(|&(_, assigned)| assigned == letter)
                .map(|(code, _)| code)
                .expect("used bitmask implies a holder");
            return Err(RubricError::LetterTaken {
                letter: letter as char,
                holder,
            });
        }

        self.letters[code.index()] = Some(letter);
        self.used |= 1 << (letter - b'a');
        Ok(())
    }

    /// The letter assigned to a code, if any
    #[inline]
    #[must_use]
    pub fn get(&self, code: Code) -> Option<u8> {
        self.letters[code.index()]
    }

    /// Is this letter already assigned to some code?
    #[inline]
    #[must_use]
    pub fn is_letter_used(&self, letter: u8) -> bool {
        self.used & (1 << (letter - b'a')) != 0
    }

    /// Bitmask of letters currently assigned (bit 0 = 'a')
    #[inline]
    #[must_use]
    pub(crate) fn used_mask(&self) -> u32 {
        self.used
    }

    /// Number of codes with an assigned letter
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.letters.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no code has a letter yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Iterate over (code, letter) assignments in code order
    pub fn iter(&self) -> impl Iterator<Item = (Code, u8)> + '_ {
        self.letters.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|letter| {
                let code = Code::new(i as u8 + 1).expect("index 0-25 maps to code 1-26");
                (code, letter)
            })
        })
    }

    /// Extend a copy of this rubric with a whole trial word
    ///
    /// Assigns each code in `codes` to the letter of `word` at the same
    /// position. Returns `None` if any assignment would break an invariant;
    /// the original rubric is never touched.
    #[must_use]
    pub fn with_word(&self, codes: &[Code], word: &[u8]) -> Option<Self> {
        debug_assert_eq!(codes.len(), word.len(), "codes and word must align");

        let mut trial = self.clone();
        for (&code, &letter) in codes.iter().zip(word) {
            if trial.assign(code, letter).is_err() {
                return None;
            }
        }
        Some(trial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: u8) -> Code {
        Code::new(value).unwrap()
    }

    #[test]
    fn empty_rubric() {
        let rubric = Rubric::new();
        assert!(rubric.is_empty());
        assert_eq!(rubric.assigned_count(), 0);
        assert_eq!(rubric.get(code(1)), None);
        assert!(!rubric.is_letter_used(b'a'));
    }

    #[test]
    fn assign_and_get() {
        let mut rubric = Rubric::new();
        rubric.assign(code(5), b'x').unwrap();

        assert_eq!(rubric.get(code(5)), Some(b'x'));
        assert!(rubric.is_letter_used(b'x'));
        assert!(!rubric.is_letter_used(b'y'));
        assert_eq!(rubric.assigned_count(), 1);
    }

    #[test]
    fn assign_same_letter_twice_is_noop() {
        let mut rubric = Rubric::new();
        rubric.assign(code(5), b'x').unwrap();
        rubric.assign(code(5), b'x').unwrap();
        assert_eq!(rubric.assigned_count(), 1);
    }

    #[test]
    fn reassigning_code_rejected() {
        let mut rubric = Rubric::new();
        rubric.assign(code(7), b'r').unwrap();

        let err = rubric.assign(code(7), b's').unwrap_err();
        assert!(matches!(
            err,
            RubricError::CodeReassigned {
                old: 'r',
                new: 's',
                ..
            }
        ));
    }

    #[test]
    fn sharing_letter_between_codes_rejected() {
        let mut rubric = Rubric::new();
        rubric.assign(code(7), b'r').unwrap();

        let err = rubric.assign(code(8), b'r').unwrap_err();
        assert!(matches!(err, RubricError::LetterTaken { letter: 'r', holder } if holder == code(7)));
    }

    #[test]
    fn from_pairs_valid_seed() {
        let rubric = Rubric::from_pairs([(22, 'o'), (10, 'r'), (3, 'p')]).unwrap();
        assert_eq!(rubric.get(code(22)), Some(b'o'));
        assert_eq!(rubric.get(code(10)), Some(b'r'));
        assert_eq!(rubric.get(code(3)), Some(b'p'));
    }

    #[test]
    fn from_pairs_contradictory_seed_rejected() {
        // The same code given two different letters
        let err = Rubric::from_pairs([(7, 'r'), (7, 's')]).unwrap_err();
        assert!(matches!(err, RubricError::CodeReassigned { .. }));

        // Two codes given the same letter
        let err = Rubric::from_pairs([(7, 'r'), (9, 'r')]).unwrap_err();
        assert!(matches!(err, RubricError::LetterTaken { .. }));
    }

    #[test]
    fn from_pairs_rejects_bad_input() {
        assert!(matches!(
            Rubric::from_pairs([(0, 'a')]),
            Err(RubricError::InvalidCode(0))
        ));
        assert!(matches!(
            Rubric::from_pairs([(27, 'a')]),
            Err(RubricError::InvalidCode(27))
        ));
        assert!(matches!(
            Rubric::from_pairs([(1, 'A')]),
            Err(RubricError::InvalidLetter('A'))
        ));
        assert!(matches!(
            Rubric::from_pairs([(1, '3')]),
            Err(RubricError::InvalidLetter('3'))
        ));
    }

    #[test]
    fn with_word_extends_copy() {
        let rubric = Rubric::from_pairs([(1, 'a')]).unwrap();
        let codes = [code(1), code(2), code(3), code(1)];

        let trial = rubric.with_word(&codes, b"aida").unwrap();
        assert_eq!(trial.get(code(2)), Some(b'i'));
        assert_eq!(trial.get(code(3)), Some(b'd'));

        // Original untouched
        assert_eq!(rubric.assigned_count(), 1);
    }

    #[test]
    fn with_word_rejects_conflicts() {
        let rubric = Rubric::from_pairs([(1, 'z')]).unwrap();
        let codes = [code(1), code(2), code(3), code(1)];

        // Code 1 is 'z', word wants 'a' in its positions
        assert!(rubric.with_word(&codes, b"aida").is_none());

        // Duplicate codes demanding two different letters
        let rubric = Rubric::new();
        assert!(rubric.with_word(&codes, b"aide").is_none());

        // Two distinct codes demanding the same letter
        let codes = [code(1), code(2), code(3), code(4)];
        assert!(rubric.with_word(&codes, b"noon").is_none());
    }

    #[test]
    fn iter_yields_assignments_in_code_order() {
        let rubric = Rubric::from_pairs([(10, 'r'), (3, 'p'), (22, 'o')]).unwrap();
        let pairs: Vec<(u8, u8)> = rubric.iter().map(|(c, l)| (c.value(), l)).collect();
        assert_eq!(pairs, vec![(3, b'p'), (10, b'r'), (22, b'o')]);
    }
}
