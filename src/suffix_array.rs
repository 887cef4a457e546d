/*!
 * Construct the [suffix array] for a text using [`SuffixArrayConstruction`].
 *
 * The construction is based on the skew algorithm by Kärkkäinen and Sanders ([DC3]). It runs in linear time
 * relative to the length of the text plus the largest symbol of the text, or just the length of the text
 * when its symbols are sparse, and uses freshly allocated scratch
 * memory on every level of its recursion.
 *
 * The entry point to the API is the [`SuffixArrayConstruction`] builder-like struct. It is always required to
 * pass the input text and register the output element. Further configuration options include supplying
 * an output buffer and the alphabet size.
 *
 * ```
 * use skewsa::{AlphabetSize, SuffixArrayConstruction};
 *
 * let text = [3u8, 1, 2, 1, 3, 1, 2];
 *
 * // additional space in the buffer stays untouched
 * let mut my_suffix_array_buffer = vec![0u32; 10];
 *
 * let res = SuffixArrayConstruction::for_text(&text)
 *     .in_borrowed_buffer(&mut my_suffix_array_buffer)
 *     .with_alphabet_size(AlphabetSize::new(3))
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res.suffix_array(), [5, 1, 3, 6, 2, 4, 0]);
 * ```
 *
 * # Sentinel Convention and Suffix Array Length
 *
 * In the literature, the input texts to suffix array construction algorithms are usually
 * assumed to be terminated by a unique, lexicographically smallest character, denoted by $.
 * This library reserves the symbol 0 for this purpose. It must not appear in the text, but every
 * suffix is sorted as if it were followed by it. Therefore, a suffix that is a prefix of another
 * suffix is the smaller one, and the resulting suffix array has the same length as the text.
 *
 * # Alphabet Size
 *
 * All symbols have to be in the range `[1, max_symbol]`, which is checked before the construction starts.
 * The maximum symbol can be set using [`SuffixArrayConstruction::with_alphabet_size`]. By default,
 * the largest symbol of the text is used.
 *
 * # Return Type and LCP
 *
 * The read-only return type of [`SuffixArrayConstruction::run`] bundles the suffix array
 * and a reference to the input text. It is generic over whether an owned or borrowed suffix array buffer is used.
 * The object can be destructured into parts or used to compute the longest common prefix array, see
 * [`lcp`](super::lcp).
 *
 * [suffix array]: https://en.wikipedia.org/wiki/Suffix_array
 * [DC3]: https://doi.org/10.1145/1217856.1217858
 */

use std::marker::PhantomData;

use crate::{
    InputElement, OutputElement, SkewError,
    helpers::{self, from_index},
    lcp::LcpConstruction,
    output_buffer::OutputBuffer,
    skew,
    typestate::{
        BorrowedBuffer, BufferMode, BufferModeOrUndecided, OutputElementOrUndecided, OwnedBuffer,
        Undecided,
    },
};

/// One of the two main entry points of this library, for constructing suffix arrays.
///
/// See [`suffix_array`](self) for details.
#[derive(Debug)]
pub struct SuffixArrayConstruction<
    's,
    't,
    I: InputElement,
    O: OutputElementOrUndecided,
    B: BufferModeOrUndecided,
> {
    text: &'t [I],
    suffix_array_buffer: Option<&'s mut [O]>,
    alphabet_size: AlphabetSize,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'t, I: InputElement> SuffixArrayConstruction<'static, 't, I, Undecided, Undecided> {
    /// The first method to call.
    ///
    /// The text has to be at most as long as the maximum value of the output element type you will choose.
    pub fn for_text(text: &'t [I]) -> Self {
        Self {
            text,
            suffix_array_buffer: None,
            alphabet_size: AlphabetSize::default(),
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Provide a buffer in which the suffix array will be stored.
    ///
    /// The buffer has to be at least as large as the text. The suffix array is written to its beginning
    /// and the rest of the buffer is left untouched.
    pub fn in_borrowed_buffer<'s, O: OutputElement>(
        self,
        suffix_array_buffer: &'s mut [O],
    ) -> SuffixArrayConstruction<'s, 't, I, O, BorrowedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: Some(suffix_array_buffer),
            alphabet_size: self.alphabet_size,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library of your desired output element type,
    /// if you want to obtain the suffix array in a [`Vec`].
    pub fn in_owned_buffer<O: OutputElement>(
        self,
    ) -> SuffixArrayConstruction<'static, 't, I, O, OwnedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: None,
            alphabet_size: self.alphabet_size,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<u32>`].
    pub fn in_owned_buffer32(self) -> SuffixArrayConstruction<'static, 't, I, u32, OwnedBuffer> {
        self.in_owned_buffer()
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<u64>`].
    pub fn in_owned_buffer64(self) -> SuffixArrayConstruction<'static, 't, I, u64, OwnedBuffer> {
        self.in_owned_buffer()
    }
}

impl<'s, 't, I: InputElement, O: OutputElementOrUndecided, B: BufferModeOrUndecided>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Set the maximum symbol of the alphabet, see [`suffix_array`](self#alphabet-size) for details.
    pub fn with_alphabet_size(self, alphabet_size: AlphabetSize) -> Self {
        Self {
            alphabet_size,
            ..self
        }
    }
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Construct the suffix array for the given text.
    ///
    /// # Errors
    ///
    /// [`SkewError::InvalidSymbol`] if a symbol of the text is not in the range `[1, max_symbol]`.
    ///
    /// # Panics
    ///
    /// If the text is too long for the output element type or a borrowed buffer is smaller than the text.
    ///
    /// # Returns
    ///
    /// An error or a type that bundles the suffix array with a reference to the text.
    /// See [`suffix_array`](self#return-type-and-lcp) for details.
    pub fn run(mut self) -> Result<SuffixArrayWithText<'s, 't, I, O, B>, SkewError> {
        let text_len = self.text.len();
        let max_symbol = self.alphabet_size.resolve(self.text);

        let (symbols, used_max_symbol) = helpers::validated_symbols(self.text, max_symbol)?;
        let (symbols, radix_max_symbol) = helpers::bounded_alphabet(symbols, used_max_symbol);

        helpers::assert_text_fits_output::<O>(text_len);

        let mut suffix_array = OutputBuffer::with_len(
            self.suffix_array_buffer.take(),
            text_len,
            O::ZERO,
            "suffix_array_buffer must be at least as large as text",
        );

        let positions = skew::suffix_array(&symbols, radix_max_symbol);

        for (slot, position) in suffix_array.iter_mut().zip(positions) {
            *slot = from_index(position);
        }

        Ok(SuffixArrayWithText {
            suffix_array,
            text: self.text,
            max_symbol,
        })
    }
}

/// The read-only return type of a suffix array construction.
///
/// It keeps a reference to the text to allow safely constructing an LCP array.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithText<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> {
    pub(crate) suffix_array: OutputBuffer<'s, O, B>,
    pub(crate) text: &'t [I],
    pub(crate) max_symbol: usize,
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayWithText<'s, 't, I, O, B>
{
    pub fn suffix_array(&self) -> &[O] {
        &self.suffix_array
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    /// The maximum symbol the text was validated against.
    pub fn max_symbol(&self) -> usize {
        self.max_symbol
    }

    pub fn into_parts(self) -> (B::Buffer<'s, O>, &'t [I], usize) {
        (self.suffix_array.into_user(), self.text, self.max_symbol)
    }

    /// Construct this type without going through a [`SuffixArrayConstruction`] or by using the parts
    /// obtained by [`Self::into_parts`].
    ///
    /// # Safety
    ///
    /// You are claiming that the suffix array is correct for the text and that all symbols of the text
    /// are in the range `[1, max_symbol]`. Later operations on this object may panic or return
    /// meaningless results otherwise.
    pub unsafe fn from_parts(
        suffix_array: B::Buffer<'s, O>,
        text: &'t [I],
        max_symbol: usize,
    ) -> Self {
        Self {
            suffix_array: OutputBuffer::from_user(suffix_array),
            text,
            max_symbol,
        }
    }

    /// Start the construction of the LCP array, see [`lcp`](super::lcp) for details.
    pub fn lcp_construction(self) -> LcpConstruction<'static, 's, 't, I, O, B, OwnedBuffer> {
        LcpConstruction {
            text: self.text,
            suffix_array: self.suffix_array,
            lcp_buffer: None,
            _lcp_buffer_mode_marker: PhantomData,
        }
    }
}

impl<'t, I: InputElement, O: OutputElement> SuffixArrayWithText<'static, 't, I, O, OwnedBuffer> {
    pub fn into_vec(self) -> Vec<O> {
        self.suffix_array.into_user()
    }
}

/// The maximum symbol of the alphabet of a text.
///
/// See [`suffix_array`](self#alphabet-size) for details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlphabetSize(AlphabetSizeInner);

impl AlphabetSize {
    /// All symbols of the text must be in `[1, max_symbol]`.
    pub fn new(max_symbol: usize) -> Self {
        Self(AlphabetSizeInner::Fixed { max_symbol })
    }

    /// Use the largest symbol of the text. This is the default.
    pub fn compute_from_max_of_text() -> Self {
        Self(AlphabetSizeInner::ComputeFromMaxOfText)
    }

    pub(crate) fn resolve<I: InputElement>(self, text: &[I]) -> usize {
        match self.0 {
            AlphabetSizeInner::ComputeFromMaxOfText => helpers::max_symbol_of_text(text),
            AlphabetSizeInner::Fixed { max_symbol } => max_symbol,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
enum AlphabetSizeInner {
    #[default]
    ComputeFromMaxOfText,
    Fixed {
        max_symbol: usize,
    },
}
