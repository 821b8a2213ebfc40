//! Hangul jamo decomposition
//!
//! A syllable block is split into its initial consonant, vowel and optional
//! final consonant with the standard Unicode arithmetic, and each slot is then
//! expanded into base jamo: doubled consonants become two identical consonants,
//! compound vowels become two or three base vowels, and consonant clusters
//! become their two constituents. Only the 24 base jamo ever leave this module.

use crate::error::WordError;
use std::fmt;

/// First precomposed syllable (가)
const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣)
const SYLLABLE_LAST: u32 = 0xD7A3;

const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// One base phonetic atom: 14 consonants followed by 10 vowels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Jamo {
    /// ㄱ
    G,
    /// ㄴ
    N,
    /// ㄷ
    D,
    /// ㄹ
    R,
    /// ㅁ
    M,
    /// ㅂ
    B,
    /// ㅅ
    S,
    /// ㅇ
    Ng,
    /// ㅈ
    J,
    /// ㅊ
    Ch,
    /// ㅋ
    K,
    /// ㅌ
    T,
    /// ㅍ
    P,
    /// ㅎ
    H,
    /// ㅏ
    A,
    /// ㅑ
    Ya,
    /// ㅓ
    Eo,
    /// ㅕ
    Yeo,
    /// ㅗ
    O,
    /// ㅛ
    Yo,
    /// ㅜ
    U,
    /// ㅠ
    Yu,
    /// ㅡ
    Eu,
    /// ㅣ
    I,
}

use Jamo::{A, B, Ch, D, Eo, Eu, G, H, I, J, K, M, N, Ng, O, P, R, S, T, U, Ya, Yeo, Yo, Yu};

impl Jamo {
    /// All base jamo, consonants first
    pub const ALL: [Self; 24] = [
        G, N, D, R, M, B, S, Ng, J, Ch, K, T, P, H, A, Ya, Eo, Yeo, O, Yo, U, Yu, Eu, I,
    ];

    /// Compatibility jamo character (U+3131 block)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            G => 'ㄱ',
            N => 'ㄴ',
            D => 'ㄷ',
            R => 'ㄹ',
            M => 'ㅁ',
            B => 'ㅂ',
            S => 'ㅅ',
            Ng => 'ㅇ',
            J => 'ㅈ',
            Ch => 'ㅊ',
            K => 'ㅋ',
            T => 'ㅌ',
            P => 'ㅍ',
            H => 'ㅎ',
            A => 'ㅏ',
            Ya => 'ㅑ',
            Eo => 'ㅓ',
            Yeo => 'ㅕ',
            O => 'ㅗ',
            Yo => 'ㅛ',
            U => 'ㅜ',
            Yu => 'ㅠ',
            Eu => 'ㅡ',
            I => 'ㅣ',
        }
    }

    /// Parse a base jamo from its compatibility character
    ///
    /// Compound jamo (ㄲ, ㅘ, ㄳ, ...) are not base atoms and return `None`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|jamo| jamo.as_char() == ch)
    }

    #[inline]
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self, A | Ya | Eo | Yeo | O | Yo | U | Yu | Eu | I)
    }
}

impl fmt::Display for Jamo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Initial consonants in Unicode order; doubled ones expand to two atoms
const CHOSEONG: [&[Jamo]; 19] = [
    &[G],    // ㄱ
    &[G, G], // ㄲ
    &[N],    // ㄴ
    &[D],    // ㄷ
    &[D, D], // ㄸ
    &[R],    // ㄹ
    &[M],    // ㅁ
    &[B],    // ㅂ
    &[B, B], // ㅃ
    &[S],    // ㅅ
    &[S, S], // ㅆ
    &[Ng],   // ㅇ
    &[J],    // ㅈ
    &[J, J], // ㅉ
    &[Ch],   // ㅊ
    &[K],    // ㅋ
    &[T],    // ㅌ
    &[P],    // ㅍ
    &[H],    // ㅎ
];

/// Vowels in Unicode order; the 11 compound vowels expand to 2 or 3 atoms
const JUNGSEONG: [&[Jamo]; 21] = [
    &[A],        // ㅏ
    &[A, I],     // ㅐ
    &[Ya],       // ㅑ
    &[Ya, I],    // ㅒ
    &[Eo],       // ㅓ
    &[Eo, I],    // ㅔ
    &[Yeo],      // ㅕ
    &[Yeo, I],   // ㅖ
    &[O],        // ㅗ
    &[O, A],     // ㅘ
    &[O, A, I],  // ㅙ
    &[O, I],     // ㅚ
    &[Yo],       // ㅛ
    &[U],        // ㅜ
    &[U, Eo],    // ㅝ
    &[U, Eo, I], // ㅞ
    &[U, I],     // ㅟ
    &[Yu],       // ㅠ
    &[Eu],       // ㅡ
    &[Eu, I],    // ㅢ
    &[I],        // ㅣ
];

/// Final consonants in Unicode order (index 0 = none); doubled consonants and
/// the 11 clusters expand to two atoms
const JONGSEONG: [&[Jamo]; 28] = [
    &[],     // (none)
    &[G],    // ㄱ
    &[G, G], // ㄲ
    &[G, S], // ㄳ
    &[N],    // ㄴ
    &[N, J], // ㄵ
    &[N, H], // ㄶ
    &[D],    // ㄷ
    &[R],    // ㄹ
    &[R, G], // ㄺ
    &[R, M], // ㄻ
    &[R, B], // ㄼ
    &[R, S], // ㄽ
    &[R, T], // ㄾ
    &[R, P], // ㄿ
    &[R, H], // ㅀ
    &[M],    // ㅁ
    &[B],    // ㅂ
    &[B, S], // ㅄ
    &[S],    // ㅅ
    &[S, S], // ㅆ
    &[Ng],   // ㅇ
    &[J],    // ㅈ
    &[Ch],   // ㅊ
    &[K],    // ㅋ
    &[T],    // ㅌ
    &[P],    // ㅍ
    &[H],    // ㅎ
];

/// Which slot of a syllable block an expansion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Initial,
    Vowel,
    Final,
}

/// The three slots of one syllable block, already expanded to base jamo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: &'static [Jamo],
    pub vowel: &'static [Jamo],
    pub last: &'static [Jamo],
}

impl Syllable {
    /// Split a precomposed syllable; `None` outside 가..=힣
    #[must_use]
    pub fn split(ch: char) -> Option<Self> {
        let code = ch as u32;
        if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let offset = code - SYLLABLE_BASE;
        let jong = offset % JONGSEONG_COUNT;
        let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
        let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);

        Some(Self {
            initial: CHOSEONG[cho as usize],
            vowel: JUNGSEONG[jung as usize],
            last: JONGSEONG[jong as usize],
        })
    }

    /// Slots that expanded to more than one atom
    pub fn expanded_slots(&self) -> impl Iterator<Item = (Slot, &'static [Jamo])> {
        [
            (Slot::Initial, self.initial),
            (Slot::Vowel, self.vowel),
            (Slot::Final, self.last),
        ]
        .into_iter()
        .filter(|(_, atoms)| atoms.len() > 1)
    }

    /// Atoms of all three slots in order
    pub fn atoms(&self) -> impl Iterator<Item = Jamo> {
        self.initial
            .iter()
            .chain(self.vowel)
            .chain(self.last)
            .copied()
    }
}

/// Check that a word consists only of precomposed Hangul syllables
#[must_use]
pub fn is_hangul_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| Syllable::split(ch).is_some())
}

/// Decompose a Hangul word into its base jamo sequence
///
/// # Errors
/// Returns `WordError` if the word is empty or contains a character outside
/// the precomposed syllable range.
///
/// # Examples
/// ```
/// use hongdle::core::{Jamo, decompose};
///
/// let jamo = decompose("앉다").unwrap();
/// assert_eq!(jamo, [Jamo::Ng, Jamo::A, Jamo::N, Jamo::J, Jamo::D, Jamo::A]);
/// assert!(decompose("abc").is_err());
/// ```
pub fn decompose(word: &str) -> Result<Vec<Jamo>, WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }

    let mut result = Vec::with_capacity(word.chars().count() * 3);
    for (position, ch) in word.chars().enumerate() {
        let syllable = Syllable::split(ch).ok_or(WordError::NotHangul { ch, position })?;
        result.extend(syllable.atoms());
    }

    Ok(result)
}

/// Render a jamo sequence as a compact string
#[must_use]
pub fn jamo_string(jamo: &[Jamo]) -> String {
    jamo.iter().map(|j| j.as_char()).collect()
}
