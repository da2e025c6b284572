//! Streaming Separator Tokenizer
//!
//! Splits a string on a fixed separator and emits every piece, in order,
//! with its position. It's the second stage of the word pipeline: the
//! normalized text of each sample is split on a single space, and the same
//! code splits comma lists (`", "`) in other columns.
//!
//! ## Splitting Rules
//!
//! Splitting is plain separator splitting, not whitespace splitting:
//!
//! ```ignore
//! "a b"   -> ["a", "b"]
//! "a  b"  -> ["a", "", "b"]
//! " a "   -> ["", "a", ""]
//! ""      -> [""]
//! ```
//!
//! `k` separators always yield `k + 1` pieces. Empty pieces are emitted and
//! left for the caller to drop; the word aggregator removes the empty token
//! after counting.
//!
//! ## Zero Allocation
//!
//! Pieces are slices of the input. Separator search uses `memchr`
//! (`memchr_iter` for one-byte separators, `memmem` otherwise).

use memchr::{memchr_iter, memmem};

/// Streaming tokenizer over a fixed separator.
///
/// ## Example
///
/// ```
/// use typestat_core::analyzer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer::WORDS.tokenize("hello  world", |text, _pos| words.push(text));
///
/// assert_eq!(words, ["hello", "", "world"]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Tokenizer<'s> {
    separator: &'s str,
}

impl Tokenizer<'static> {
    /// Splits normalized text into words.
    pub const WORDS: Tokenizer<'static> = Tokenizer::new(" ");

    /// Splits `"a, b, c"` style lists.
    pub const COMMA_LIST: Tokenizer<'static> = Tokenizer::new(", ");
}

impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer splitting on `separator`.
    ///
    /// An empty separator never splits: the whole input is one piece.
    #[inline]
    pub const fn new(separator: &'s str) -> Self {
        Self { separator }
    }

    /// Returns the separator.
    #[inline(always)]
    pub const fn separator(&self) -> &'s str {
        self.separator
    }

    /// Splits `input` and emits `(piece, position)` for every piece.
    ///
    /// Position is `u32`. After emitting a piece at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    #[inline]
    pub fn tokenize<'n, F>(&self, input: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let sep = self.separator.as_bytes();
        let mut start = 0usize;
        let mut pos = 0u32;

        // Piece boundaries always fall next to a complete separator match, and
        // a separator is itself valid UTF-8, so `input[start..i]` never cuts a
        // character in half.
        let mut push = |end: usize, start: &mut usize, skip: usize| -> bool {
            emit(&input[*start..end], pos);
            if pos == u32::MAX {
                return false;
            }
            pos += 1;
            *start = end + skip;
            true
        };

        match sep.len() {
            0 => {}
            1 => {
                for i in memchr_iter(sep[0], input.as_bytes()) {
                    if !push(i, &mut start, 1) {
                        return;
                    }
                }
            }
            n => {
                for i in memmem::find_iter(input.as_bytes(), sep) {
                    if !push(i, &mut start, n) {
                        return;
                    }
                }
            }
        }

        push(input.len(), &mut start, 0);
    }

    /// Collects the pieces of `input` into a `Vec`.
    pub fn split<'n>(&self, input: &'n str) -> Vec<&'n str> {
        let mut out = Vec::new();
        self.tokenize(input, |text, _| out.push(text));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<'n>(tokenizer: Tokenizer<'_>, input: &'n str) -> Vec<(&'n str, u32)> {
        let mut out = Vec::new();
        tokenizer.tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect(Tokenizer::WORDS, "hello");
        assert_eq!(out, [("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect(Tokenizer::WORDS, "hello world");
        assert_eq!(out, [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect(Tokenizer::WORDS, "the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_input_is_one_empty_piece() {
        assert_eq!(Tokenizer::WORDS.split(""), [""]);
    }

    #[test]
    fn doubled_separator_emits_empty_piece() {
        assert_eq!(Tokenizer::WORDS.split("a  b"), ["a", "", "b"]);
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(Tokenizer::WORDS.split(" a "), ["", "a", ""]);
        assert_eq!(Tokenizer::WORDS.split(" "), ["", ""]);
    }

    #[test]
    fn piece_count_is_separators_plus_one() {
        let input = "x  y z   ";
        let seps = input.matches(' ').count();
        assert_eq!(Tokenizer::WORDS.split(input).len(), seps + 1);
    }

    #[test]
    fn only_space_splits_words() {
        assert_eq!(Tokenizer::WORDS.split("a\tb\nc d"), ["a\tb\nc", "d"]);
    }

    #[test]
    fn comma_list() {
        assert_eq!(
            Tokenizer::COMMA_LIST.split("red, green, blue"),
            ["red", "green", "blue"]
        );
    }

    #[test]
    fn comma_without_space_does_not_split() {
        assert_eq!(Tokenizer::COMMA_LIST.split("a,b, c"), ["a,b", "c"]);
    }

    #[test]
    fn multibyte_separator_matches_are_non_overlapping() {
        assert_eq!(Tokenizer::new("aa").split("aaa"), ["", "a"]);
    }

    #[test]
    fn empty_separator_never_splits() {
        assert_eq!(Tokenizer::new("").split("a b"), ["a b"]);
    }

    #[test]
    fn unicode_pieces() {
        assert_eq!(Tokenizer::WORDS.split("über café"), ["über", "café"]);
        assert_eq!(Tokenizer::new("→").split("a→b"), ["a", "b"]);
    }

    #[test]
    fn pieces_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::WORDS.tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr <= end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::WORDS;

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }
}
