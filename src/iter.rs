use std::fmt;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

use crate::maybe::Maybe;

/// An iterator over the value held by a [`Maybe`], if any.
pub struct Iter<'a, T> {
    slot: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(maybe: &'a Maybe<T>) -> Self {
        Self {
            slot: maybe.as_option(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slot.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.slot.is_some());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slot.take()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { slot: self.slot }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over a mutable reference to the value held by a [`Maybe`], if any.
pub struct IterMut<'a, T> {
    slot: Option<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(maybe: &'a mut Maybe<T>) -> Self {
        Self {
            slot: maybe.as_option_mut(),
        }
    }

    fn reborrow(&self) -> Iter<T> {
        Iter {
            slot: self.slot.as_deref(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.slot.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.slot.is_some());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.slot.take()
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: Debug> Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.reborrow()).finish()
    }
}

/// An owning iterator over the value held by a [`Maybe`], if any.
pub struct IntoIter<T> {
    slot: Maybe<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(maybe: Maybe<T>) -> Self {
        Self { slot: maybe }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slot.take().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slot.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.slot.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use crate::Maybe;

    #[test]
    fn size_hints_track_occupancy() {
        let slot = Maybe::new('x');
        let mut iter = slot.iter();

        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&'x'));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn back_and_front_share_the_single_element() {
        let mut slot = Maybe::new(1);
        let mut iter = slot.iter_mut();

        assert_eq!(iter.next_back(), Some(&mut 1));
        assert_eq!(iter.next(), None);

        let mut owned = Maybe::new(2).into_iter();
        assert_eq!(owned.next_back(), Some(2));
        assert_eq!(owned.next_back(), None);
    }

    #[test]
    fn debug_lists_the_element() {
        let mut slot = Maybe::new(7);
        assert_eq!(format!("{:?}", slot.iter()), "[7]");
        assert_eq!(format!("{:?}", slot.iter_mut()), "[7]");
        assert_eq!(format!("{:?}", slot.into_iter()), "[7]");

        let empty: Maybe<i32> = Maybe::Empty;
        assert_eq!(format!("{:?}", empty.iter()), "[]");
    }

    #[test]
    fn clone_restarts_independently() {
        let slot = Maybe::new("a");
        let mut iter = slot.iter();
        let copy = iter.clone();

        iter.next();
        assert_eq!(copy.count(), 1);
        assert_eq!(iter.count(), 0);
    }

    #[test]
    fn owned_iteration_drops_nothing_extra() {
        use std::rc::Rc;

        let rc = Rc::new(());
        let values: Vec<_> = Maybe::new(Rc::clone(&rc)).into_iter().collect();

        assert_eq!(Rc::strong_count(&rc), 2);
        drop(values);
        assert_eq!(Rc::strong_count(&rc), 1);
    }
}
