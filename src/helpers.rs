use log::debug;
use num_traits::NumCast;

use crate::{InputElement, OutputElement, SkewError};

/// The symbol that is read past the end of a text. Smaller than any symbol of the alphabet.
pub(crate) const SENTINEL: usize = 0;

/// Number of symbols produced by [`lowercase_symbols`] for the letters `a` to `z`.
pub const LOWERCASE_ALPHABET_SIZE: usize = 26;

/// The single bounds-checked accessor for every phase of the skew algorithm.
#[inline]
pub(crate) fn symbol_or_sentinel(text: &[usize], index: usize) -> usize {
    text.get(index).copied().unwrap_or(SENTINEL)
}

/// Converts the text into `usize` symbols and returns it together with its largest symbol.
///
/// Fails with the first position whose symbol is not in `[1, max_symbol]`.
pub(crate) fn validated_symbols<I: InputElement>(
    text: &[I],
    max_symbol: usize,
) -> Result<(Vec<usize>, usize), SkewError> {
    let mut symbols = Vec::with_capacity(text.len());
    let mut found_max_symbol = SENTINEL;

    for (position, &c) in text.iter().enumerate() {
        match c.to_usize() {
            Some(symbol) if symbol != SENTINEL && symbol <= max_symbol => {
                found_max_symbol = found_max_symbol.max(symbol);
                symbols.push(symbol);
            }
            _ => {
                return Err(SkewError::InvalidSymbol {
                    position,
                    symbol: c.to_u64().unwrap_or(u64::MAX),
                    max_symbol,
                });
            }
        }
    }

    Ok((symbols, found_max_symbol))
}

/// Remaps the symbols onto `[1, k]` when the largest one exceeds the text length, so that the radix
/// passes never need more counters than the text has symbols. The order of the symbols is kept.
pub(crate) fn bounded_alphabet(symbols: Vec<usize>, max_symbol: usize) -> (Vec<usize>, usize) {
    if max_symbol <= symbols.len() {
        return (symbols, max_symbol);
    }

    debug!(
        "compacting alphabet with maximum symbol {max_symbol} for a text of length {}",
        symbols.len()
    );

    compact_alphabet(&symbols)
}

// Symbols that don't fit into usize saturate, validation rejects them later.
pub(crate) fn max_symbol_of_text<I: InputElement>(text: &[I]) -> usize {
    text.iter()
        .max()
        .map_or(SENTINEL, |c| c.to_usize().unwrap_or(usize::MAX))
}

pub(crate) fn to_index<O: OutputElement>(value: O) -> usize {
    value
        .to_usize()
        .expect("suffix array and LCP values are bounded by the text length")
}

pub(crate) fn from_index<O: OutputElement>(index: usize) -> O {
    <O as NumCast>::from(index).expect("the text length was checked to fit into the output type")
}

pub(crate) fn assert_text_fits_output<O: OutputElement>(text_len: usize) {
    let Some(_): Option<O> = NumCast::from(text_len) else {
        panic!(
            "The text is too long for the chosen output type. Text len: {}, Max allowed len: {}",
            text_len,
            O::MAX
        );
    };
}

/// Maps the symbols of `text` onto the dense alphabet `[1, k]`, where `k` is the number of distinct
/// symbols, preserving their relative order.
///
/// Returns the new text and `k`, which can be used as the maximum symbol. The suffix array of the new text
/// is the same as the one of the original text, but the construction needs far less memory when the original
/// symbols are large and sparse.
///
/// ```
/// let (dense, max_symbol) = skewsa::compact_alphabet(&[1_000_000u64, 7, 1_000_000, 42]);
///
/// assert_eq!(dense, [3, 1, 3, 2]);
/// assert_eq!(max_symbol, 3);
/// ```
pub fn compact_alphabet<I: InputElement>(text: &[I]) -> (Vec<usize>, usize) {
    let mut distinct_symbols = text.to_vec();
    distinct_symbols.sort_unstable();
    distinct_symbols.dedup();

    let dense_text = text
        .iter()
        .map(|c| {
            distinct_symbols
                .binary_search(c)
                .map_or(SENTINEL, |rank| rank + 1)
        })
        .collect();

    (dense_text, distinct_symbols.len())
}

/// Maps `a..=z` to the symbols `1..=26`.
///
/// Every other byte is mapped outside of this range, so that a construction
/// with [`LOWERCASE_ALPHABET_SIZE`] as the maximum symbol rejects it.
pub fn lowercase_symbols(text: &[u8]) -> Vec<u8> {
    text.iter()
        .map(|&c| {
            c.checked_sub(b'a')
                .map_or(0, |offset| offset.saturating_add(1))
        })
        .collect()
}
