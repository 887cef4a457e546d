/// Everything that can go wrong when calling into this library with malformed input.
///
/// All of these are contract violations by the caller. The library does not retry and does
/// not return partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SkewError {
    /// A symbol of the text is 0 or larger than the maximum symbol of the alphabet.
    /// `position` is the first offending index of the text.
    #[error("invalid symbol {symbol} at position {position}, symbols must be in [1, {max_symbol}]")]
    InvalidSymbol {
        position: usize,
        symbol: u64,
        max_symbol: usize,
    },

    /// The text and the suffix array passed to an LCP construction differ in length.
    #[error("text has length {text_len}, but the suffix array has length {suffix_array_len}")]
    SizeMismatch {
        text_len: usize,
        suffix_array_len: usize,
    },

    /// The LCP array of an empty text is not defined.
    #[error("cannot construct the LCP array of an empty text")]
    EmptyInput,
}
