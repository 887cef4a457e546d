/*!
 * Count the distinct substrings of every cyclic window of a text.
 *
 * For a text of length `L` and a window width `k`, window `i` consists of the `k` symbols starting at
 * position `i`, wrapping around to the start of the text when the end is reached. Every window is handled
 * independently by a suffix array and LCP array construction.
 *
 * ```
 * use skewsa::{AlphabetSize, lowercase_symbols, LOWERCASE_ALPHABET_SIZE};
 * use skewsa::window::distinct_substrings_per_window;
 *
 * let text = lowercase_symbols(b"aab");
 *
 * // windows: "aab", "aba", "baa"
 * let counts =
 *     distinct_substrings_per_window(&text, 3, AlphabetSize::new(LOWERCASE_ALPHABET_SIZE)).unwrap();
 *
 * assert_eq!(counts, [5, 5, 5]);
 * ```
 */

use std::iter::FusedIterator;

use crate::{
    AlphabetSize, InputElement, OutputElement, SkewError, SuffixArrayConstruction,
    helpers::to_index,
};

/// Iterator over the cyclic windows of a text, one per start position.
///
/// When the width is larger than the text, the text is repeated as often as needed.
#[derive(Debug, Clone)]
pub struct CyclicWindows<'t, I> {
    text: &'t [I],
    width: usize,
    start: usize,
}

impl<'t, I: Copy> CyclicWindows<'t, I> {
    pub fn new(text: &'t [I], width: usize) -> Self {
        Self {
            text,
            width,
            start: 0,
        }
    }
}

impl<I: Copy> Iterator for CyclicWindows<'_, I> {
    type Item = Vec<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.text.len() {
            return None;
        }

        let window = self.text[self.start..]
            .iter()
            .chain(self.text.iter().cycle())
            .take(self.width)
            .copied()
            .collect();

        self.start += 1;

        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len().saturating_sub(self.start);
        (remaining, Some(remaining))
    }
}

impl<I: Copy> ExactSizeIterator for CyclicWindows<'_, I> {}

impl<I: Copy> FusedIterator for CyclicWindows<'_, I> {}

/// The number of distinct non-empty substrings of a text, given its suffix array and LCP array.
///
/// Every suffix contributes its prefixes that are not shared with the next suffix in the suffix array.
///
/// # Panics
///
/// If the LCP array is not exactly one entry shorter than a non-empty suffix array.
pub fn count_distinct_substrings<O: OutputElement>(suffix_array: &[O], lcp: &[O]) -> usize {
    let len = suffix_array.len();

    let Some((&last, rest)) = suffix_array.split_last() else {
        return 0;
    };

    assert_eq!(
        lcp.len(),
        len - 1,
        "the LCP array must be one entry shorter than the suffix array"
    );

    let shared_with_successor: usize = rest
        .iter()
        .zip(lcp)
        .map(|(&position, &common)| len - to_index(position) - to_index(common))
        .sum();

    shared_with_successor + (len - to_index(last))
}

/// Count the distinct substrings of every cyclic window of `text` with the given width.
///
/// The result has one entry per start position of the text. A width of 0 results in counts of 0.
///
/// # Errors
///
/// [`SkewError::InvalidSymbol`] if a window contains a symbol outside of the alphabet.
pub fn distinct_substrings_per_window<I: InputElement>(
    text: &[I],
    width: usize,
    alphabet_size: AlphabetSize,
) -> Result<Vec<usize>, SkewError> {
    CyclicWindows::new(text, width)
        .map(|window| -> Result<usize, SkewError> {
            if window.is_empty() {
                return Ok(0);
            }

            let count = SuffixArrayConstruction::for_text(&window)
                .in_owned_buffer::<usize>()
                .with_alphabet_size(alphabet_size)
                .run()?
                .lcp_construction()
                .run()?
                .distinct_substrings();

            Ok(count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_wrap_around() {
        let windows: Vec<_> = CyclicWindows::new(&[1, 2, 3], 2).collect();

        assert_eq!(windows, [vec![1, 2], vec![2, 3], vec![3, 1]]);
    }

    #[test]
    fn windows_wider_than_text_repeat_it() {
        let windows: Vec<_> = CyclicWindows::new(&[1, 2], 5).collect();

        assert_eq!(windows, [vec![1, 2, 1, 2, 1], vec![2, 1, 2, 1, 2]]);
    }

    #[test]
    fn window_edge_cases() {
        assert_eq!(CyclicWindows::<u8>::new(&[], 3).count(), 0);

        let mut windows = CyclicWindows::new(&[4u8, 5], 0);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows.next(), Some(vec![]));
        assert_eq!(windows.next(), Some(vec![]));
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn distinct_substrings_of_banana() {
        let suffix_array = [5usize, 3, 1, 0, 4, 2];
        let lcp = [1usize, 3, 0, 0, 2];

        // a, b, n, an, ba, na, ana, ban, nan, anan, bana, nana, anana, banan, banana
        assert_eq!(count_distinct_substrings(&suffix_array, &lcp), 15);
        assert_eq!(count_distinct_substrings::<u32>(&[], &[]), 0);
    }

    #[test]
    fn zero_width() {
        let counts = distinct_substrings_per_window(&[1u8, 2], 0, AlphabetSize::new(2)).unwrap();

        assert_eq!(counts, [0, 0]);
    }
}
