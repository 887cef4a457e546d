/*!
 * Linear time [suffix array] construction with the skew algorithm (also known as DC3) and
 * [longest common prefix array] (LCP) construction with a Kasai-style scan, in pure Rust.
 *
 * There are two ways to use this library. The free functions [`build_suffix_array`] and
 * [`build_lcp_array`] take a text and return owned [`Vec<usize>`]s:
 *
 * ```
 * use skewsa::{build_lcp_array, build_suffix_array};
 *
 * // "banana" with a = 1, b = 2, n = 14
 * let text = [2u8, 1, 14, 1, 14, 1];
 *
 * let suffix_array = build_suffix_array(&text, 26).unwrap();
 * assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
 *
 * let lcp = build_lcp_array(&text, &suffix_array).unwrap();
 * assert_eq!(lcp, [1, 3, 0, 0, 2]);
 * ```
 *
 * The builder-like [`SuffixArrayConstruction`] additionally lets you choose the output element type,
 * write into a borrowed buffer and chain the LCP construction. See [`suffix_array`] and [`lcp`] for details.
 *
 * # Alphabet Convention
 *
 * Texts are sequences of symbols from the alphabet `[1, max_symbol]`. The value 0 is reserved as the
 * sentinel, which is conceptually smaller than any symbol and padded to the end of every suffix.
 * It must not occur in the text. Texts with symbols outside the alphabet are rejected with
 * [`SkewError::InvalidSymbol`] before any work is done.
 *
 * The memory usage of the algorithm is linear in the length of the text plus the largest symbol of the
 * text. When the largest symbol exceeds the length of the text, the symbols are first remapped onto a
 * dense alphabet, like [`compact_alphabet`] does, so it is bounded by the length of the text.
 *
 * # Sliding Windows
 *
 * The [`window`] module contains the logic for counting the distinct substrings of every cyclic window
 * of a text, which is the classic application of the suffix array and LCP array pair.
 *
 * [suffix array]: https://en.wikipedia.org/wiki/Suffix_array
 * [longest common prefix array]: https://en.wikipedia.org/wiki/LCP_array
 */

mod error;
mod helpers;
mod output_buffer;
mod skew;

pub mod lcp;
pub mod suffix_array;
pub mod typestate;
pub mod window;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

pub use error::SkewError;
pub use helpers::{LOWERCASE_ALPHABET_SIZE, compact_alphabet, lowercase_symbols};
pub use lcp::{LcpConstruction, SuffixArrayWithLcp};
pub use suffix_array::{AlphabetSize, SuffixArrayConstruction, SuffixArrayWithText};

/// Construct the suffix array of `sequence`, whose symbols must be in the range `[1, max_symbol]`.
///
/// An empty text results in an empty suffix array.
///
/// # Errors
///
/// [`SkewError::InvalidSymbol`] if any symbol is 0 or larger than `max_symbol`.
pub fn build_suffix_array<I: InputElement>(
    sequence: &[I],
    max_symbol: usize,
) -> Result<Vec<usize>, SkewError> {
    let (text, used_max_symbol) = helpers::validated_symbols(sequence, max_symbol)?;
    let (text, radix_max_symbol) = helpers::bounded_alphabet(text, used_max_symbol);

    Ok(skew::suffix_array(&text, radix_max_symbol))
}

/// Construct the LCP array of `sequence` and its suffix array.
///
/// The result has one entry less than the text: `lcp[i]` is the length of the longest common prefix
/// of the suffixes starting at `suffix_array[i]` and `suffix_array[i + 1]`.
///
/// # Errors
///
/// [`SkewError::SizeMismatch`] if the two slices differ in length and [`SkewError::EmptyInput`] if
/// they are empty.
///
/// # Panics
///
/// If `suffix_array` contains an index that is out of bounds for `sequence`.
pub fn build_lcp_array<I: InputElement>(
    sequence: &[I],
    suffix_array: &[usize],
) -> Result<Vec<usize>, SkewError> {
    lcp::check_lcp_input(sequence.len(), suffix_array.len())?;

    let mut lcp = vec![0; sequence.len() - 1];
    lcp::fill_lcp(sequence, suffix_array, &mut lcp);

    Ok(lcp)
}

// -------------------- InputElement and OutputElement with implementations --------------------
/// The symbol types of texts that can be handled by this library.
pub trait InputElement: sealed::Sealed + Debug + Copy + Ord + Hash + PrimInt + Unsigned {}

/// The element types of suffix arrays and LCP arrays. The length of the text must fit into this type.
pub trait OutputElement:
    sealed::Sealed + Debug + Display + Copy + Ord + Hash + PrimInt + Unsigned
{
    const MAX: Self;
    const ZERO: Self;
}

impl sealed::Sealed for u8 {}
impl sealed::Sealed for u16 {}
impl sealed::Sealed for u32 {}
impl sealed::Sealed for u64 {}
impl sealed::Sealed for usize {}

impl InputElement for u8 {}
impl InputElement for u16 {}
impl InputElement for u32 {}
impl InputElement for u64 {}
impl InputElement for usize {}

impl OutputElement for u32 {
    const MAX: Self = u32::MAX;
    const ZERO: Self = 0;
}

impl OutputElement for u64 {
    const MAX: Self = u64::MAX;
    const ZERO: Self = 0;
}

impl OutputElement for usize {
    const MAX: Self = usize::MAX;
    const ZERO: Self = 0;
}

mod sealed {
    pub trait Sealed {}
}
