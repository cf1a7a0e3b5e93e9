use crate::fatal;
use crate::maybe::Maybe;
use crate::values::all_true;

/// Unwraps a record of [`Maybe`] slots into a record of their values, all at once.
///
/// | Receiver                  | Output                    |
/// |---------------------------|---------------------------|
/// | `(Maybe<A>, Maybe<B>, ..)` | `(A, B, ..)`              |
/// | `&(Maybe<A>, ..)`         | `(&A, ..)`                |
/// | `&mut (Maybe<A>, ..)`     | `(&mut A, ..)`            |
///
/// Every slot is checked before any value is extracted.
///
/// # Aborts
///
/// If any slot is empty, the position of the first empty slot is logged and the process aborts.
/// This is the same defect as reading an empty [`Maybe`] directly.
pub trait Surely {
    /// The record of unwrapped values.
    type Output;

    /// Extracts every value of the record.
    fn surely(self) -> Self::Output;
}

/// Unwraps a record of [`Maybe`] slots, see [`Surely`].
///
/// # Examples
///
/// ```
/// # use rx_util::{pack, surely, Maybe};
/// let results = pack!(Maybe::new(1), Maybe::new("two"));
///
/// assert_eq!(surely(&results), (&1, &"two"));
/// assert_eq!(surely(results), (1, "two"));
/// ```
///
/// Only records made entirely of `Maybe` slots can be unwrapped:
///
/// ```compile_fail
/// # use rx_util::{surely, Maybe};
/// let _ = surely((Maybe::new(1), 2));
/// ```
#[track_caller]
pub fn surely<R: Surely>(record: R) -> R::Output {
    record.surely()
}

#[track_caller]
fn check_occupancy(occupancy: &[bool]) {
    if !all_true(occupancy) {
        let position = occupancy
            .iter()
            .position(|&occupied| !occupied)
            .unwrap_or_default();

        fatal::empty_element(position, occupancy.len());
    }
}

macro_rules! surely_impl {
    ($len:literal; $($idx:tt $T:ident),*) => {
        impl<$($T),*> Surely for ($(Maybe<$T>,)*) {
            type Output = ($($T,)*);

            #[track_caller]
            fn surely(self) -> Self::Output {
                let occupancy: [bool; $len] = [$(self.$idx.is_occupied()),*];
                check_occupancy(&occupancy);

                ($(self.$idx.into_inner(),)*)
            }
        }

        impl<'a, $($T),*> Surely for &'a ($(Maybe<$T>,)*) {
            type Output = ($(&'a $T,)*);

            #[track_caller]
            fn surely(self) -> Self::Output {
                let occupancy: [bool; $len] = [$(self.$idx.is_occupied()),*];
                check_occupancy(&occupancy);

                ($(self.$idx.get(),)*)
            }
        }

        impl<'a, $($T),*> Surely for &'a mut ($(Maybe<$T>,)*) {
            type Output = ($(&'a mut $T,)*);

            #[track_caller]
            fn surely(self) -> Self::Output {
                let occupancy: [bool; $len] = [$(self.$idx.is_occupied()),*];
                check_occupancy(&occupancy);

                ($(self.$idx.get_mut(),)*)
            }
        }
    };
}

for_each_arity!(surely_impl);
