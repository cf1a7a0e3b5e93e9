use crate::apply::Apply;

/// Collects any number of positional arguments into a new record.
///
/// Each argument is moved into its slot, in argument order. `pack!()` is `()`.
///
/// # Examples
///
/// ```
/// # use rx_util::pack;
/// let record = pack!(1, "two", 3.0);
/// assert_eq!(record, (1, "two", 3.0));
///
/// let single = pack!(String::from("one"));
/// assert_eq!(single.0, "one");
/// ```
#[macro_export]
macro_rules! pack {
    ($($arg:expr),* $(,)?) => {
        ($($arg,)*)
    };
}

/// A collector that gathers already-grouped arguments into a fresh record.
///
/// `Pack` is used wherever [`Apply`] expects a callable: applying it to a record moves every
/// element into a new tuple of the same shape. Applied to a borrowed record it collects the
/// element references instead. Created by [`pack`]; use the [`pack!`](crate::pack!) macro to
/// collect spread arguments.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub struct Pack;

/// Returns the record collector. This has no side effects.
///
/// # Examples
///
/// ```
/// # use rx_util::{apply, apply_to, pack};
/// assert_eq!(apply((1, 'x'), pack()), (1, 'x'));
///
/// let record = (String::from("kept"), 2);
/// assert_eq!(apply(&record, pack()), (&record.0, &record.1));
///
/// let collect = apply_to(pack());
/// assert_eq!(collect.call(("a", "b")), ("a", "b"));
/// ```
pub fn pack() -> Pack {
    Pack
}

macro_rules! pack_impl {
    (@collector [$($lt:lifetime)?] $C:ty; $($idx:tt $T:ident),*) => {
        impl<$($lt,)? $($T),*> Apply<$C> for ($($T,)*) {
            type Output = ($($T,)*);

            fn apply(self, _: $C) -> Self::Output {
                ($(self.$idx,)*)
            }
        }

        impl<'a, $($lt,)? $($T),*> Apply<$C> for &'a ($($T,)*) {
            type Output = ($(&'a $T,)*);

            fn apply(self, _: $C) -> Self::Output {
                ($(&self.$idx,)*)
            }
        }

        impl<'a, $($lt,)? $($T),*> Apply<$C> for &'a mut ($($T,)*) {
            type Output = ($(&'a mut $T,)*);

            fn apply(self, _: $C) -> Self::Output {
                ($(&mut self.$idx,)*)
            }
        }
    };
    ($len:literal; $($idx:tt $T:ident),*) => {
        pack_impl!(@collector [] Pack; $($idx $T),*);
        pack_impl!(@collector ['p] &'p Pack; $($idx $T),*);
        pack_impl!(@collector ['p] &'p mut Pack; $($idx $T),*);
    };
}

for_each_arity!(pack_impl);
