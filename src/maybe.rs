use std::mem;
use std::ops::{Deref, DerefMut};

use crate::fatal;
use crate::iter::{IntoIter, Iter, IterMut};

/// A single slot holding zero or one value of type `T`.
///
/// A `Maybe` is either [`Empty`](Maybe::Empty) or [`Occupied`](Maybe::Occupied).
/// A value is constructed once for every transition into `Occupied` and dropped once for every
/// transition out of it; no placeholder `T` is ever created for an empty slot.
///
/// Unlike [`Option`], reading the value of an empty `Maybe` through [`get`](Maybe::get),
/// [`get_mut`](Maybe::get_mut), [`into_inner`](Maybe::into_inner) or dereferencing is not a
/// recoverable condition. It is treated as a defect in the caller: the failure is logged and the
/// process aborts without unwinding. Use [`as_option`](Maybe::as_option) to inspect a slot that
/// may legitimately be empty.
///
/// A `Maybe` can also be used as a sequence of zero or one elements, see [`iter`](Maybe::iter).
///
/// # Examples
///
/// ```
/// # use rx_util::Maybe;
/// let mut slot: Maybe<i32> = Maybe::default();
/// assert!(slot.is_empty());
///
/// slot.reset_with(5);
/// assert_eq!(*slot, 5);
/// assert_eq!(slot.len(), 1);
///
/// slot.reset();
/// assert_eq!(slot.len(), 0);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// No value is held.
    Empty,
    /// A live value is held.
    Occupied(T),
}

impl<T> Maybe<T> {
    /// Constructs an occupied slot holding `value`.
    pub const fn new(value: T) -> Self {
        Maybe::Occupied(value)
    }

    /// Converts an `Option` into a slot, occupied exactly when the option is `Some`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Occupied(value),
            None => Maybe::Empty,
        }
    }

    /// Returns `true` if the slot holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Empty)
    }

    /// Returns `true` if the slot holds a value.
    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the number of held values, `0` or `1`.
    pub fn len(&self) -> usize {
        match self {
            Maybe::Empty => 0,
            Maybe::Occupied(_) => 1,
        }
    }

    /// Returns a reference to the held value.
    ///
    /// # Aborts
    ///
    /// Aborts the process if the slot is empty.
    #[track_caller]
    pub fn get(&self) -> &T {
        match self {
            Maybe::Occupied(value) => value,
            Maybe::Empty => fatal::empty_access(),
        }
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Aborts
    ///
    /// Aborts the process if the slot is empty.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match self {
            Maybe::Occupied(value) => value,
            Maybe::Empty => fatal::empty_access(),
        }
    }

    /// Consumes the slot and returns the held value.
    ///
    /// # Aborts
    ///
    /// Aborts the process if the slot is empty.
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self {
            Maybe::Occupied(value) => value,
            Maybe::Empty => fatal::empty_access(),
        }
    }

    /// Drops the held value, if any, leaving the slot empty.
    ///
    /// Calling this on an empty slot does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rx_util::Maybe;
    /// let mut slot = Maybe::new(String::from("foo"));
    /// slot.reset();
    /// slot.reset();
    /// assert!(slot.is_empty());
    /// ```
    pub fn reset(&mut self) {
        if self.is_occupied() {
            *self = Maybe::Empty;
        }
    }

    /// Drops the held value, if any, and then stores `value`.
    ///
    /// The old value is always dropped before the new one is stored.
    pub fn reset_with<U: Into<T>>(&mut self, value: U) {
        self.reset();
        *self = Maybe::Occupied(value.into());
    }

    /// Moves the held value out into a new `Maybe`, leaving this slot empty.
    ///
    /// The returned slot is occupied exactly when `self` was.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rx_util::Maybe;
    /// let mut source = Maybe::new(5);
    /// let destination = source.take();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(destination, Maybe::new(5));
    /// ```
    pub fn take(&mut self) -> Maybe<T> {
        mem::take(self)
    }

    /// Returns the held value as an `Option` of a reference.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Maybe::Occupied(value) => Some(value),
            Maybe::Empty => None,
        }
    }

    /// Returns the held value as an `Option` of a mutable reference.
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        match self {
            Maybe::Occupied(value) => Some(value),
            Maybe::Empty => None,
        }
    }

    /// Converts the slot into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Occupied(value) => Some(value),
            Maybe::Empty => None,
        }
    }

    /// Returns an iterator over the held value, yielding nothing if the slot is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rx_util::Maybe;
    /// let slot = Maybe::new(3);
    /// assert_eq!(slot.iter().sum::<i32>(), 3);
    ///
    /// let empty: Maybe<i32> = Maybe::default();
    /// assert_eq!(empty.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Returns an iterator over a mutable reference to the held value.
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut::new(self)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Empty
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Occupied(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        match self {
            Maybe::Occupied(value) => Maybe::Occupied(value.clone()),
            Maybe::Empty => Maybe::Empty,
        }
    }

    // Assignment from another slot: drop ours first, then rebuild from the source.
    fn clone_from(&mut self, source: &Self) {
        self.reset();

        if let Maybe::Occupied(value) = source {
            *self = Maybe::Occupied(value.clone());
        }
    }
}

impl<T> Deref for Maybe<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> DerefMut for Maybe<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a mut Maybe<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
