// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::iter::FusedIterator;

use crate::Optional;

/// Iterator over a borrowed [`Optional`], yielding at most one element
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a T>,
}

/// Iterator over an owned [`Optional`], yielding at most one element
#[derive(Debug)]
pub struct IntoIter<T> {
    next: Option<T>,
}

impl<T> Optional<T> {
    /// Returns an iterator over the held value: one element if present,
    /// none if empty. Each call starts afresh.
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.get() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.next.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.next.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            next: self.into_inner(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Keeps the first element; an empty iterator gives an empty optional.
impl<T> FromIterator<T> for Optional<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Optional::of_nullable(iter.into_iter().next())
    }
}
