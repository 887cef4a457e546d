use either::Either;

use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use crate::typestate::BufferMode;

// The slots a construction writes its output to, either allocated by the library or a prefix of a
// user-provided slice. `B` is OwnedBuffer exactly when the slots are a Vec.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct OutputBuffer<'a, T, B> {
    slots: Either<Vec<T>, &'a mut [T]>,
    _mode: PhantomData<B>,
}

impl<'a, T, B: BufferMode> OutputBuffer<'a, T, B> {
    pub(crate) fn from_user(buffer: B::Buffer<'a, T>) -> Self {
        Self {
            slots: B::into_either(buffer),
            _mode: PhantomData,
        }
    }

    pub(crate) fn into_user(self) -> B::Buffer<'a, T> {
        B::from_either(self.slots)
    }
}

impl<'a, T: Copy, B: BufferMode> OutputBuffer<'a, T, B> {
    /// Exactly `len` slots, taken from the front of `registered` or freshly allocated.
    ///
    /// Panics with `too_small` if the registered slice is shorter than `len`.
    pub(crate) fn with_len(
        registered: Option<&'a mut [T]>,
        len: usize,
        fill: T,
        too_small: &str,
    ) -> Self {
        let slots = match registered {
            Some(slice) => {
                assert!(slice.len() >= len, "{too_small}");
                Either::Right(&mut slice[..len])
            }
            None => Either::Left(vec![fill; len]),
        };

        Self {
            slots,
            _mode: PhantomData,
        }
    }
}

impl<T, B> Deref for OutputBuffer<'_, T, B> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.slots
    }
}

impl<T, B> DerefMut for OutputBuffer<'_, T, B> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}
