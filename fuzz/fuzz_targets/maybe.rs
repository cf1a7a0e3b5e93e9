#![no_main]

use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rx_util::Maybe;

type T = u8;

#[derive(Arbitrary, Debug)]
enum Operation {
    Reset,
    ResetWith(T),
    Take,
    CloneFrom(Option<T>),
    Increment,
}

fuzz_target!(|operations: Vec<Operation>| {
    let mut maybe = Maybe::<T>::default();
    let mut model: Option<T> = None;

    for operation in operations {
        match operation {
            Operation::Reset => {
                maybe.reset();
                model = None;
            }
            Operation::ResetWith(value) => {
                maybe.reset_with(value);
                model = Some(value);
            }
            Operation::Take => {
                let taken = maybe.take();
                assert_eq!(taken.into_option(), model.take());
            }
            Operation::CloneFrom(source) => {
                maybe.clone_from(&Maybe::from_option(source));
                model = source;
            }
            Operation::Increment => {
                // Only touch the value through the aborting accessors when it is present
                if let Some(value) = model.as_mut() {
                    *value = value.wrapping_add(1);
                    let next = maybe.get().wrapping_add(1);
                    *maybe.get_mut() = next;
                }
            }
        }

        assert_eq!(maybe.as_option(), model.as_ref());
        assert_eq!(maybe.len(), usize::from(model.is_some()));
        assert_eq!(
            maybe.iter().copied().collect::<Vec<_>>(),
            model.iter().copied().collect::<Vec<_>>()
        );
    }
});
