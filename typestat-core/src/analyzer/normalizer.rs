//! Punctuation-stripping text normalizer.
//!
//! First stage of the word pipeline. Every sample's free text is lower-cased
//! and every character of [`PUNCTUATION`] is replaced by a single space.
//! Whitespace is *not* collapsed: `"a, b"` becomes `"a  b"`, and the empty
//! piece produced by splitting it later is dropped during aggregation.

/// Characters replaced by a space. Digits count as punctuation; the
/// apostrophe does not, so contractions survive as single words.
pub const PUNCTUATION: &str = ",./<>?;:\"[]{}`1234567890-=\\~!@#$%^&*()_+|";

const fn build_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0usize;
    while b < 128 {
        table[b] = (b as u8).to_ascii_lowercase();
        b += 1;
    }

    let punct = PUNCTUATION.as_bytes();
    let mut i = 0usize;
    while i < punct.len() {
        table[punct[i] as usize] = b' ';
        i += 1;
    }
    table
}

/// ASCII byte -> normalized byte.
const ASCII_TABLE: [u8; 128] = build_table();

/// Lower-cases text and blanks out punctuation.
///
/// ASCII-only text goes through a lookup table. Anything else is
/// lower-cased as a whole with `str::to_lowercase`, which may expand a
/// single character into several and applies the Greek final sigma rule.
///
/// # Examples
///
/// ```
/// use typestat_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello, World!"), "hello  world ");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Returns `true` if `ch` is blanked out by normalization.
    #[inline(always)]
    pub fn is_punctuation(ch: char) -> bool {
        ch.is_ascii() && ASCII_TABLE[ch as usize] == b' ' && ch != ' '
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        if input.is_ascii() {
            out.extend(input.bytes().map(|b| ASCII_TABLE[b as usize] as char));
            return;
        }

        // Final sigma depends on the surrounding letters, so the whole
        // sample is lower-cased before punctuation is blanked.
        let lowered = input.to_lowercase();
        out.extend(lowered.chars().map(|ch| {
            if ch.is_ascii() {
                ASCII_TABLE[ch as usize] as char
            } else {
                ch
            }
        }));
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Normalizes `text` in place, using `scratch` as the work buffer.
    ///
    /// After the call `scratch` holds the previous contents of `text`, so a
    /// single scratch buffer can be threaded through a whole column.
    #[inline]
    pub fn normalize_in_place(&self, text: &mut String, scratch: &mut String) {
        self.normalize_into(text, scratch);
        core::mem::swap(text, scratch);
    }
}
