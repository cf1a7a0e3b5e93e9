use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// A compile-time index sequence of `N` integers starting at `START` and advancing by `STEP`.
///
/// This type is never instantiated; the sequence lives in [`Values::ARRAY`], which is evaluated
/// during compilation. A negative length cannot be written, and a sequence that overflows `i64`
/// is rejected by const evaluation.
///
/// # Examples
///
/// ```
/// # use rx_util::Values;
/// assert_eq!(Values::<4>::ARRAY, [0, 1, 2, 3]);
/// assert_eq!(Values::<3, 5, 10>::ARRAY, [10, 15, 20]);
/// assert!(Values::<0>::ARRAY.is_empty());
/// ```
pub struct Values<const N: usize, const STEP: i64 = 1, const START: i64 = 0> {
    _marker: PhantomData<[i64; N]>,
}

impl<const N: usize, const STEP: i64, const START: i64> Values<N, STEP, START> {
    /// The number of integers in the sequence.
    pub const LEN: usize = N;

    /// The sequence itself.
    pub const ARRAY: [i64; N] = values_from::<N>(STEP, START);
}

impl<const N: usize, const STEP: i64, const START: i64> Debug for Values<N, STEP, START> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(Self::ARRAY.iter()).finish()
    }
}

/// Builds the sequence `start, start + step, ..., start + (N - 1) * step`.
///
/// Usable in constant expressions, which is how [`Values::ARRAY`] is produced.
///
/// # Examples
///
/// ```
/// # use rx_util::values_from;
/// const EVENS: [i64; 4] = values_from::<4>(2, 0);
/// assert_eq!(EVENS, [0, 2, 4, 6]);
/// ```
pub const fn values_from<const N: usize>(step: i64, start: i64) -> [i64; N] {
    let mut result = [0; N];
    let mut cursor = start;
    let mut i = 0;

    while i < N {
        result[i] = cursor;
        i += 1;

        if i < N {
            cursor += step;
        }
    }

    result
}

/// Returns `true` if every flag is set. An empty slice is trivially `true`.
///
/// # Examples
///
/// ```
/// # use rx_util::all_true;
/// const OK: bool = all_true(&[true, true]);
/// assert!(OK);
/// assert!(!all_true(&[true, false]));
/// assert!(all_true(&[]));
/// ```
pub const fn all_true(flags: &[bool]) -> bool {
    let mut i = 0;

    while i < flags.len() {
        if !flags[i] {
            return false;
        }
        i += 1;
    }

    true
}

/// The same sequence as [`Values`], produced lazily at run time.
///
/// Used when the length is only known while the program runs. Where [`Values::ARRAY`] fails to
/// compile on overflow, the iterator instead stops at the last value that fits in `i64`; its
/// [`len`](ExactSizeIterator::len) already reflects that.
///
/// # Examples
///
/// ```
/// # use rx_util::values;
/// let steps: Vec<i64> = values(3, -2, 1).collect();
/// assert_eq!(steps, [1, -1, -3]);
///
/// let clamped = values(3, i64::MAX / 2 + 1, 0);
/// assert_eq!(clamped.len(), 2);
/// ```
pub fn values(len: usize, step: i64, start: i64) -> ValuesFrom {
    ValuesFrom {
        cursor: start,
        step,
        remaining: len.min(representable(step, start)),
    }
}

// Number of terms from `start` on that fit in `i64`, saturating at `usize::MAX`.
fn representable(step: i64, start: i64) -> usize {
    let room = match step.cmp(&0) {
        Ordering::Equal => return usize::MAX,
        Ordering::Greater => (i128::from(i64::MAX) - i128::from(start)) / i128::from(step),
        Ordering::Less => (i128::from(start) - i128::from(i64::MIN)) / -i128::from(step),
    };

    usize::try_from(room + 1).unwrap_or(usize::MAX)
}

/// An iterator over a run-time index sequence, see [`values`].
#[derive(Clone)]
pub struct ValuesFrom {
    cursor: i64,
    step: i64,
    remaining: usize,
}

impl Iterator for ValuesFrom {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.cursor;
        self.remaining -= 1;

        // Only step while another element is owed; `remaining` never exceeds what fits
        if self.remaining > 0 {
            self.cursor += self.step;
        }

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for ValuesFrom {}

impl ExactSizeIterator for ValuesFrom {}

impl Debug for ValuesFrom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::{all_true, values, values_from, Values};

    macro_rules! pin_lengths {
        ($($n:literal)*) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<compile_time_sequence_of_ $n>]() {
                        let expected: Vec<i64> = (0..$n).collect();
                        assert_eq!(Values::<$n>::LEN, $n);
                        assert_eq!(Values::<$n>::ARRAY.to_vec(), expected);
                    }
                }
            )*
        };
    }

    pin_lengths!(0 1 2 3 5 8 13);

    #[test]
    fn step_and_start() {
        assert_eq!(Values::<3, 5, 10>::ARRAY, [10, 15, 20]);
        assert_eq!(Values::<4, { -1 }, 0>::ARRAY, [0, -1, -2, -3]);
        assert_eq!(Values::<2, 0, 7>::ARRAY, [7, 7]);
    }

    #[test]
    fn const_context() {
        const SEQUENCE: [i64; 3] = values_from::<3>(3, 1);
        assert_eq!(SEQUENCE, [1, 4, 7]);
    }

    #[test]
    fn last_element_at_the_edge_does_not_overflow() {
        assert_eq!(values_from::<2>(1, i64::MAX - 1), [i64::MAX - 1, i64::MAX]);
        assert_eq!(values(2, 1, i64::MAX - 1).last(), Some(i64::MAX));
    }

    #[test]
    fn runtime_stops_at_the_last_representable_value() {
        let half = i64::MAX / 2 + 1;
        assert_eq!(values(3, half, 0).collect::<Vec<_>>(), [0, half]);
        assert_eq!(values(3, half, 0).take(2).count(), 2);

        let falling = values(5, -1, i64::MIN + 1);
        assert_eq!(falling.len(), 2);
        assert_eq!(falling.collect::<Vec<_>>(), [i64::MIN + 1, i64::MIN]);

        assert_eq!(
            values(4, i64::MAX, i64::MIN).collect::<Vec<_>>(),
            [i64::MIN, -1, i64::MAX - 1]
        );
        assert_eq!(values(usize::MAX, 0, 3).len(), usize::MAX);
    }

    #[test]
    fn runtime_matches_compile_time() {
        assert!(values(6, 4, -3).eq(Values::<6, 4, { -3 }>::ARRAY));
    }

    #[test]
    fn all_true_folds() {
        assert!(all_true(&[]));
        assert!(all_true(&[true]));
        assert!(all_true(&[true, true, true]));
        assert!(!all_true(&[false]));
        assert!(!all_true(&[true, false, true]));
    }

    #[test]
    fn debug_lists_the_sequence() {
        assert_eq!(format!("{:?}", values(3, 2, 1)), "[1, 3, 5]");
    }

    proptest! {
        #[test]
        fn prop_runtime_length(
            len in 0usize..512,
            step in -1_000i64..1_000,
            start in -1_000i64..1_000
        ) {
            let iter = values(len, step, start);
            prop_assert_eq!(iter.len(), len);
            prop_assert_eq!(iter.count(), len);
        }

        #[test]
        fn prop_runtime_arithmetic(
            len in 0usize..512,
            step in -1_000i64..1_000,
            start in -1_000i64..1_000
        ) {
            for (i, value) in values(len, step, start).enumerate() {
                prop_assert_eq!(value, start + step * i as i64);
            }
        }

        #[test]
        fn prop_default_step_is_the_index(len in 0usize..512) {
            let expected: Vec<i64> = (0..len as i64).collect();
            prop_assert_eq!(values(len, 1, 0).collect::<Vec<_>>(), expected);
        }
    }
}
