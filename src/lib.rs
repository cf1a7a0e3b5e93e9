#![doc = include_str!("./doc.md")]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub use apply::*;
pub use iter::*;
pub use maybe::*;
pub use pack::*;
pub use record::*;
pub use surely::*;
pub use unwinder::*;
pub use values::*;

// Invokes `$m!(len; index Type, ...)` once for every supported record arity.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m!(0;);
        $m!(1; 0 A);
        $m!(2; 0 A, 1 B);
        $m!(3; 0 A, 1 B, 2 C);
        $m!(4; 0 A, 1 B, 2 C, 3 D);
        $m!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
        $m!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G);
        $m!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H);
        $m!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 I);
        $m!(9; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 I, 8 J);
        $m!(10; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 I, 8 J, 9 K);
        $m!(11; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 I, 8 J, 9 K, 10 L);
        $m!(12; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 I, 8 J, 9 K, 10 L, 11 M);
    };
}

mod apply;
mod fatal;
mod iter;
mod maybe;
mod pack;
mod record;
mod surely;
mod unwinder;
mod values;
