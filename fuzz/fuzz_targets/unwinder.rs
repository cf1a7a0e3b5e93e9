#![no_main]

use std::cell::RefCell;

use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rx_util::Unwinder;

#[derive(Arbitrary, Debug)]
struct Guard {
    dismiss: bool,
    dismiss_twice: bool,
}

fuzz_target!(|guards: Vec<Guard>| {
    let ran = RefCell::new(Vec::new());
    let mut expected = Vec::new();

    {
        let mut live = Vec::new();

        for (i, guard) in guards.iter().enumerate() {
            let ran = &ran;
            let mut unwinder = Unwinder::new(move || ran.borrow_mut().push(i));

            if guard.dismiss {
                unwinder.dismiss();
                if guard.dismiss_twice {
                    unwinder.dismiss();
                }
            } else {
                expected.push(i);
            }

            live.push(unwinder);
        }

        // A `Vec` drops front to back, so pop to mirror scope order
        while let Some(unwinder) = live.pop() {
            drop(unwinder);
        }
    }

    expected.reverse();
    assert_eq!(*ran.borrow(), expected);
});
