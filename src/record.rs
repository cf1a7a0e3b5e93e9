use crate::values::Values;

/// A fixed-size heterogeneous record: a tuple of up to twelve elements.
///
/// Every tuple knows its arity and the index sequence that addresses its elements.
/// This is the shape [`apply`](crate::apply), [`Pack`](crate::Pack) and
/// [`surely`](crate::surely) operate on.
///
/// # Examples
///
/// ```
/// # use rx_util::Record;
/// type Triple = (u8, char, &'static str);
///
/// assert_eq!(<Triple as Record>::ARITY, 3);
/// assert_eq!(<<Triple as Record>::Indices>::ARRAY, [0, 1, 2]);
/// ```
pub trait Record: Sized {
    /// The number of elements in the record.
    const ARITY: usize;

    /// The positions of the record's elements, `0..ARITY`, as a [`Values`] sequence.
    ///
    /// Informational only: [`Apply`](crate::Apply), [`Pack`](crate::Pack) and
    /// [`Surely`](crate::Surely) address elements by position directly.
    type Indices;
}

macro_rules! record_impl {
    ($len:literal; $($idx:tt $T:ident),*) => {
        impl<$($T),*> Record for ($($T,)*) {
            const ARITY: usize = $len;
            type Indices = Values<$len>;
        }
    };
}

for_each_arity!(record_impl);
