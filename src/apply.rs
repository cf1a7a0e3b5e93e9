use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::record::Record;

/// Spreads a record's elements into a callable as positional arguments.
///
/// How each element reaches the callable depends on how the record is passed:
///
/// | Receiver          | Argument at position `i` |
/// |-------------------|--------------------------|
/// | `(A, B, ..)`      | `A`, `B`, .. moved out   |
/// | `&(A, B, ..)`     | `&A`, `&B`, ..           |
/// | `&mut (A, B, ..)` | `&mut A`, `&mut B`, ..   |
///
/// Arity and per-position types must match the callable's parameter list exactly;
/// anything else is a compile error.
///
/// # Examples
///
/// ```
/// # use rx_util::Apply;
/// let sum = (1, 2, 3).apply(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(sum, 6);
///
/// let mut record = (String::from("foo"), 3);
/// (&mut record).apply(|name: &mut String, count: &mut i32| {
///     name.push('!');
///     *count += 1;
/// });
/// assert_eq!(record, (String::from("foo!"), 4));
/// ```
///
/// A callable taking a different number of arguments is rejected:
///
/// ```compile_fail
/// # use rx_util::apply;
/// apply((1, 2), |a: i32| a);
/// ```
///
/// So is a callable whose parameter types differ at any position:
///
/// ```compile_fail
/// # use rx_util::apply;
/// apply((1, "two"), |a: i32, b: i32| a + b);
/// ```
///
/// Borrowed records hand out references, never values:
///
/// ```compile_fail
/// # use rx_util::apply;
/// let record = (String::from("kept"),);
/// apply(&record, |text: String| text);
/// ```
pub trait Apply<F> {
    /// What the callable returns.
    type Output;

    /// Invokes `f` with the elements of `self` in declared order.
    fn apply(self, f: F) -> Self::Output;
}

/// Invokes `f` with the elements of `record` as positional arguments.
///
/// See [`Apply`] for how each element is forwarded.
///
/// # Examples
///
/// ```
/// # use rx_util::apply;
/// fn describe(name: &str, age: u32) -> String {
///     format!("{name} is {age}")
/// }
///
/// assert_eq!(apply(("Ada", 36), describe), "Ada is 36");
/// ```
pub fn apply<R, F>(record: R, f: F) -> R::Output
where
    R: Apply<F>,
{
    record.apply(f)
}

macro_rules! apply_impl {
    ($len:literal; $($idx:tt $T:ident),*) => {
        impl<F, Out, $($T),*> Apply<F> for ($($T,)*)
        where
            F: FnOnce($($T),*) -> Out,
        {
            type Output = Out;

            fn apply(self, f: F) -> Self::Output {
                f($(self.$idx),*)
            }
        }

        impl<'a, F, Out, $($T),*> Apply<F> for &'a ($($T,)*)
        where
            F: FnOnce($(&'a $T),*) -> Out,
        {
            type Output = Out;

            fn apply(self, f: F) -> Self::Output {
                f($(&self.$idx),*)
            }
        }

        impl<'a, F, Out, $($T),*> Apply<F> for &'a mut ($($T,)*)
        where
            F: FnOnce($(&'a mut $T),*) -> Out,
        {
            type Output = Out;

            fn apply(self, f: F) -> Self::Output {
                f($(&mut self.$idx),*)
            }
        }
    };
}

for_each_arity!(apply_impl);

/// Turns a spread-argument callable into a callable of a single record.
///
/// This lets a stage producing records feed a stage that takes the record's elements as
/// separate parameters, without destructuring at every call site.
/// Created by [`apply_to`].
#[derive(Clone, Copy)]
pub struct ApplyTo<F> {
    to: F,
}

/// Wraps `f` so it can be invoked with one record instead of a spread argument list.
///
/// # Examples
///
/// ```
/// # use rx_util::{apply_to, pack};
/// let area = apply_to(|width: u32, height: u32| width * height);
/// assert_eq!(area.call(pack!(3, 4)), 12);
/// assert_eq!(area.call((5, 6)), 30);
/// ```
pub fn apply_to<F>(f: F) -> ApplyTo<F> {
    ApplyTo { to: f }
}

impl<F> ApplyTo<F> {
    /// Spreads `record` into the wrapped callable through a shared reference.
    pub fn call<'f, R>(&'f self, record: R) -> R::Output
    where
        R: Apply<&'f F>,
    {
        record.apply(&self.to)
    }

    /// Spreads `record` into the wrapped callable through a mutable reference.
    pub fn call_mut<'f, R>(&'f mut self, record: R) -> R::Output
    where
        R: Apply<&'f mut F>,
    {
        record.apply(&mut self.to)
    }

    /// Spreads `record` into the wrapped callable, consuming it.
    pub fn call_once<R>(self, record: R) -> R::Output
    where
        R: Apply<F>,
    {
        record.apply(self.to)
    }

    /// Converts the adapter into a closure taking records of type `R`.
    pub fn into_fn<R, O>(mut self) -> impl FnMut(R) -> O
    where
        R: Record + for<'f> Apply<&'f mut F, Output = O>,
    {
        move |record| record.apply(&mut self.to)
    }

    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.to
    }
}

impl<F> Debug for ApplyTo<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ApplyTo").finish_non_exhaustive()
    }
}
