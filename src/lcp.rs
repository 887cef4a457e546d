/*!
 * Construct the [longest common prefix array] (LCP) for a suffix array and text.
 *
 * [`LcpConstruction`] provides a builder-like API for constructing the LCP array. It can only be obtained from
 * a [`SuffixArrayWithText`](super::suffix_array::SuffixArrayWithText), which is in turn obtained from a
 * suffix array construction or by using its `unsafe` constructor.
 *
 * ```
 * use skewsa::SuffixArrayConstruction;
 *
 * let text = [1u8, 1, 1, 1];
 *
 * let res = SuffixArrayConstruction::for_text(&text)
 *     .in_owned_buffer32()
 *     .run()
 *     .unwrap();
 *
 * let res_with_lcp = res.lcp_construction()
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res_with_lcp.suffix_array(), [3, 2, 1, 0]);
 * assert_eq!(res_with_lcp.lcp(), [1, 2, 3]);
 * ```
 *
 * # Output Convention
 *
 * The LCP array is one entry shorter than the suffix array. Entry `i` is the length of the longest common
 * prefix of the suffixes at ranks `i` and `i + 1` of the suffix array. The LCP array of an empty
 * text is not defined and its construction fails with [`SkewError::EmptyInput`].
 *
 * The construction follows [Kasai et al.] and runs in linear time.
 *
 * [longest common prefix array]: https://en.wikipedia.org/wiki/LCP_array
 * [Kasai et al.]: https://doi.org/10.1007/3-540-48194-X_17
 */

use std::marker::PhantomData;

use crate::{
    InputElement, OutputElement, SkewError,
    helpers::{from_index, to_index},
    output_buffer::OutputBuffer,
    typestate::{BorrowedBuffer, BufferMode, OwnedBuffer},
    window,
};

/// Construct the longest common prefix array for a suffix array and text.
///
/// See [`lcp`](self) for details.
#[derive(Debug)]
pub struct LcpConstruction<
    'l,
    's,
    't,
    I: InputElement,
    O: OutputElement,
    SaB: BufferMode,
    LcpB: BufferMode,
> {
    pub(crate) text: &'t [I],
    pub(crate) suffix_array: OutputBuffer<'s, O, SaB>,
    pub(crate) lcp_buffer: Option<&'l mut [O]>,
    pub(crate) _lcp_buffer_mode_marker: PhantomData<LcpB>,
}

impl<'s, 't, I: InputElement, O: OutputElement, SaB: BufferMode>
    LcpConstruction<'static, 's, 't, I, O, SaB, OwnedBuffer>
{
    /// Construct the LCP array in a borrowed buffer instead of allocating an owned [`Vec`].
    ///
    /// The buffer must have room for at least one element less than the text. The LCP array is written to its
    /// beginning and the rest of the buffer is left untouched.
    pub fn in_borrowed_buffer<'l>(
        self,
        lcp_buffer: &'l mut [O],
    ) -> LcpConstruction<'l, 's, 't, I, O, SaB, BorrowedBuffer> {
        LcpConstruction {
            text: self.text,
            suffix_array: self.suffix_array,
            lcp_buffer: Some(lcp_buffer),
            _lcp_buffer_mode_marker: PhantomData,
        }
    }
}

impl<'l, 's, 't, I: InputElement, O: OutputElement, SaB: BufferMode, LcpB: BufferMode>
    LcpConstruction<'l, 's, 't, I, O, SaB, LcpB>
{
    /// Construct the LCP array for the given suffix array and text.
    ///
    /// # Errors
    ///
    /// [`SkewError::EmptyInput`] for an empty text and [`SkewError::SizeMismatch`] if the suffix array
    /// was not constructed for this text (only possible when it was created by `from_parts`).
    ///
    /// # Panics
    ///
    /// If a borrowed buffer is too small.
    ///
    /// # Returns
    ///
    /// An error or a type that bundles the suffix array with the LCP array.
    pub fn run(mut self) -> Result<SuffixArrayWithLcp<'l, 's, 't, I, O, SaB, LcpB>, SkewError> {
        check_lcp_input(self.text.len(), self.suffix_array.len())?;

        let mut lcp = OutputBuffer::with_len(
            self.lcp_buffer.take(),
            self.text.len() - 1,
            O::ZERO,
            "lcp_buffer must be at least as large as the text minus one",
        );

        fill_lcp(self.text, &self.suffix_array, &mut lcp);

        Ok(SuffixArrayWithLcp {
            lcp,
            suffix_array: self.suffix_array,
            text: self.text,
        })
    }
}

pub(crate) fn check_lcp_input(text_len: usize, suffix_array_len: usize) -> Result<(), SkewError> {
    if text_len != suffix_array_len {
        Err(SkewError::SizeMismatch {
            text_len,
            suffix_array_len,
        })
    } else if text_len == 0 {
        Err(SkewError::EmptyInput)
    } else {
        Ok(())
    }
}

// Kasai scan in text order. The common prefix of the suffix at `position` and its successor in the
// suffix array is at least the one of the previous position minus one, so `common` is never reset.
pub(crate) fn fill_lcp<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &[O],
    lcp: &mut [O],
) {
    let len = text.len();

    let mut rank_of_position = vec![0; len];
    for (rank, &position) in suffix_array.iter().enumerate() {
        rank_of_position[to_index(position)] = rank;
    }

    let mut common: usize = 0;

    for (position, &rank) in rank_of_position.iter().enumerate() {
        // the largest suffix has no successor
        if rank + 1 == len {
            continue;
        }

        common = common.saturating_sub(1);

        let successor = to_index(suffix_array[rank + 1]);

        while position + common < len
            && successor + common < len
            && text[position + common] == text[successor + common]
        {
            common += 1;
        }

        lcp[rank] = from_index(common);
    }
}

/// The read-only return type of an LCP construction.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithLcp<
    'l,
    's,
    't,
    I: InputElement,
    O: OutputElement,
    SaB: BufferMode,
    LcpB: BufferMode,
> {
    pub(crate) lcp: OutputBuffer<'l, O, LcpB>,
    pub(crate) suffix_array: OutputBuffer<'s, O, SaB>,
    pub(crate) text: &'t [I],
}

impl<'l, 's, 't, I: InputElement, O: OutputElement, SaB: BufferMode, LcpB: BufferMode>
    SuffixArrayWithLcp<'l, 's, 't, I, O, SaB, LcpB>
{
    pub fn suffix_array(&self) -> &[O] {
        &self.suffix_array
    }

    pub fn lcp(&self) -> &[O] {
        &self.lcp
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    /// The number of distinct non-empty substrings of the text.
    pub fn distinct_substrings(&self) -> usize {
        window::count_distinct_substrings(self.suffix_array(), self.lcp())
    }

    pub fn into_parts(self) -> (SaB::Buffer<'s, O>, LcpB::Buffer<'l, O>, &'t [I]) {
        (
            self.suffix_array.into_user(),
            self.lcp.into_user(),
            self.text,
        )
    }
}
