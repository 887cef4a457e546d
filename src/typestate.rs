/*!
 * Typestate markers of the builder APIs, most likely not relevant to you.
 *
 * A construction starts with [`Undecided`] for its output element type and buffer mode. Choosing
 * an owned or borrowed buffer replaces both, and only then does `run` become available.
 */

use either::Either;

use crate::{OutputElement, sealed::Sealed};

/// A decision in the builder process that has not been made yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undecided {}

impl Sealed for Undecided {}

pub trait OutputElementOrUndecided: Sealed {}

impl OutputElementOrUndecided for Undecided {}

impl<O: OutputElement> OutputElementOrUndecided for O {}

pub trait BufferModeOrUndecided: Sealed {}

impl BufferModeOrUndecided for Undecided {}

impl<B: BufferMode> BufferModeOrUndecided for B {}

/// Whether the output of a construction ends up in a [`Vec`] allocated by the library or in a prefix of a
/// slice provided by you.
pub trait BufferMode: Sealed {
    /// What the result types hand back from `into_parts`.
    type Buffer<'a, T: 'a>;

    #[doc(hidden)]
    fn into_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]>;

    #[doc(hidden)]
    fn from_either<'a, T>(slots: Either<Vec<T>, &'a mut [T]>) -> Self::Buffer<'a, T>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorrowedBuffer {}

impl Sealed for BorrowedBuffer {}

impl BufferMode for BorrowedBuffer {
    type Buffer<'a, T: 'a> = &'a mut [T];

    fn into_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]> {
        Either::Right(buffer)
    }

    fn from_either<'a, T>(slots: Either<Vec<T>, &'a mut [T]>) -> Self::Buffer<'a, T> {
        slots.right_or_else(|_| unreachable!("borrowed buffer mode with library-allocated slots"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnedBuffer {}

impl Sealed for OwnedBuffer {}

impl BufferMode for OwnedBuffer {
    type Buffer<'a, T: 'a> = Vec<T>;

    fn into_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]> {
        Either::Left(buffer)
    }

    fn from_either<'a, T>(slots: Either<Vec<T>, &'a mut [T]>) -> Self::Buffer<'a, T> {
        slots.left_or_else(|_| unreachable!("owned buffer mode with borrowed slots"))
    }
}
