use std::fmt;
use std::fmt::{Debug, Formatter};
use std::panic::{self, AssertUnwindSafe};

use crate::fatal;

/// A scope-exit guard that runs an action exactly once when dropped, unless dismissed.
///
/// The guard is armed on construction. When it goes out of scope, whether by falling off the
/// end, an early `return`, `?`, or unwinding from a panic, an armed guard invokes its action.
/// [`dismiss`](Unwinder::dismiss) disarms it for good.
///
/// Guards in the same scope run in reverse order of construction, so layered cleanup releases
/// the inner resource before the outer one.
///
/// If the action itself panics, the panic does not propagate: it is logged and the process
/// aborts. A failing cleanup never replaces or hides a failure that is already unwinding.
///
/// See also [`unwind!`](crate::unwind!) and [`unwind_auto!`](crate::unwind_auto!).
///
/// # Examples
///
/// ```
/// # use rx_util::Unwinder;
/// # use std::cell::RefCell;
/// let log = RefCell::new(Vec::new());
///
/// {
///     let _outer = Unwinder::new(|| log.borrow_mut().push("outer"));
///     let _inner = Unwinder::new(|| log.borrow_mut().push("inner"));
/// }
///
/// assert_eq!(*log.borrow(), ["inner", "outer"]);
/// ```
#[must_use = "the action runs as soon as an unbound guard is dropped"]
pub struct Unwinder<F: FnOnce()> {
    // `Some` while armed
    action: Option<F>,
}

impl<F: FnOnce()> Unwinder<F> {
    /// Creates an armed guard owning `action`.
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Disarms the guard; the action is dropped without running.
    ///
    /// Dismissing an already dismissed guard does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rx_util::Unwinder;
    /// # use std::cell::Cell;
    /// let ran = Cell::new(false);
    ///
    /// {
    ///     let mut guard = Unwinder::new(|| ran.set(true));
    ///     guard.dismiss();
    ///     guard.dismiss();
    /// }
    ///
    /// assert!(!ran.get());
    /// ```
    pub fn dismiss(&mut self) {
        self.action = None;
    }

    /// Returns `true` until [`dismiss`](Unwinder::dismiss) is called.
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for Unwinder<F> {
    fn drop(&mut self) {
        let Some(action) = self.action.take() else {
            return;
        };

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
            fatal::unwind_action_panicked(&*payload);
        }
    }
}

impl<F: FnOnce()> Debug for Unwinder<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Unwinder")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Binds a named [`Unwinder`] in the current scope.
///
/// `unwind!(name, action)` expands to a `let mut name` binding, so the guard can be dismissed
/// later with `name.dismiss()`.
///
/// # Examples
///
/// ```
/// # use rx_util::unwind;
/// # use std::cell::Cell;
/// let released = Cell::new(0);
///
/// {
///     unwind!(release, || released.set(released.get() + 1));
///     assert!(release.is_armed());
/// }
///
/// assert_eq!(released.get(), 1);
/// ```
#[macro_export]
macro_rules! unwind {
    ($name:ident, $action:expr $(,)?) => {
        #[allow(unused_mut)]
        let mut $name = $crate::Unwinder::new($action);
    };
}

/// Binds an anonymous [`Unwinder`] that lives until the end of the current scope.
///
/// # Examples
///
/// ```
/// # use rx_util::unwind_auto;
/// # use std::cell::RefCell;
/// let steps = RefCell::new(Vec::new());
///
/// {
///     unwind_auto!(|| steps.borrow_mut().push(1));
///     unwind_auto!(|| steps.borrow_mut().push(2));
///     steps.borrow_mut().push(0);
/// }
///
/// assert_eq!(*steps.borrow(), [0, 2, 1]);
/// ```
#[macro_export]
macro_rules! unwind_auto {
    ($action:expr $(,)?) => {
        let _unwinder = $crate::Unwinder::new($action);
    };
}

#[cfg(test)]
mod test {
    use std::cell::{Cell, RefCell};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::fatal::assert_aborts;
    use crate::Unwinder;

    #[test]
    fn runs_once_on_scope_exit() {
        let runs = Cell::new(0);

        {
            let guard = Unwinder::new(|| runs.set(runs.get() + 1));
            assert!(guard.is_armed());
            assert_eq!(runs.get(), 0);
        }

        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn dismissed_never_runs() {
        let runs = Cell::new(0);

        {
            let mut guard = Unwinder::new(|| runs.set(runs.get() + 1));
            guard.dismiss();
            assert!(!guard.is_armed());
            guard.dismiss();
        }

        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn dismiss_drops_the_action() {
        use std::rc::Rc;

        let captured = Rc::new(());
        let inside = Rc::clone(&captured);
        let mut guard = Unwinder::new(move || drop(inside));

        assert_eq!(Rc::strong_count(&captured), 2);
        guard.dismiss();
        assert_eq!(Rc::strong_count(&captured), 1);
    }

    #[test]
    fn nested_guards_run_in_reverse() {
        let order = RefCell::new(Vec::new());

        {
            let _first = Unwinder::new(|| order.borrow_mut().push(1));
            let _second = Unwinder::new(|| order.borrow_mut().push(2));
            let _third = Unwinder::new(|| order.borrow_mut().push(3));
        }

        assert_eq!(*order.borrow(), [3, 2, 1]);
    }

    #[test]
    fn runs_on_early_return() {
        fn early(runs: &Cell<u32>, bail: bool) -> Result<(), ()> {
            let _guard = Unwinder::new(|| runs.set(runs.get() + 1));

            if bail {
                return Err(());
            }

            Ok(())
        }

        let runs = Cell::new(0);
        assert!(early(&runs, true).is_err());
        assert!(early(&runs, false).is_ok());
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn runs_while_unwinding() {
        let runs = Cell::new(0);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = Unwinder::new(|| runs.set(runs.get() + 1));
            panic!("in flight");
        }));

        assert!(result.is_err());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn macros_bind_guards() {
        let order = RefCell::new(Vec::new());

        {
            unwind!(kept, || order.borrow_mut().push("kept"));
            unwind!(dropped, || order.borrow_mut().push("dropped"));
            unwind_auto!(|| order.borrow_mut().push("auto"));

            dropped.dismiss();
            assert!(kept.is_armed());
        }

        assert_eq!(*order.borrow(), ["auto", "kept"]);
    }

    #[test]
    fn debug_reports_state() {
        let mut guard = Unwinder::new(|| {});
        assert_eq!(format!("{guard:?}"), "Unwinder { armed: true }");
        guard.dismiss();
        assert_eq!(format!("{guard:?}"), "Unwinder { armed: false }");
    }

    #[test]
    fn panicking_action_aborts() {
        assert_aborts("unwinder::test::panicking_action_aborts", || {
            let result = catch_unwind(|| {
                let _guard = Unwinder::new(|| panic!("cleanup failed"));
            });

            // Unreachable when the abort happens
            drop(result);
        });
    }
}
