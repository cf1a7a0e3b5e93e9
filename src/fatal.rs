use std::any::Any;
use std::process;

// Every path here ends the process; nothing unwinds out of these functions.

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn empty_access() -> ! {
    #[cfg(feature = "log")]
    log::error!(
        "accessed the value of an empty `Maybe` at {}",
        std::panic::Location::caller()
    );

    process::abort()
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn empty_element(position: usize, arity: usize) -> ! {
    #[cfg(feature = "log")]
    log::error!(
        "`surely` found an empty `Maybe` at position {} of {} at {}",
        position,
        arity,
        std::panic::Location::caller()
    );
    #[cfg(not(feature = "log"))]
    let _ = (position, arity);

    process::abort()
}

#[cold]
#[inline(never)]
pub(crate) fn unwind_action_panicked(payload: &(dyn Any + Send)) -> ! {
    #[cfg(feature = "log")]
    log::error!("scope-exit action panicked: {}", describe(payload));
    #[cfg(not(feature = "log"))]
    let _ = payload;

    process::abort()
}

#[cfg(feature = "log")]
fn describe(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string payload>"
    }
}

/// Runs a fatal scenario in a child copy of the test binary.
///
/// The child re-enters the same test with `RX_UTIL_FATAL_CHILD` set and executes `scenario`;
/// the parent asserts that the child died abnormally instead of passing or failing normally.
#[cfg(test)]
pub(crate) fn assert_aborts(test_path: &str, scenario: impl FnOnce()) {
    const CHILD_VAR: &str = "RX_UTIL_FATAL_CHILD";

    if std::env::var(CHILD_VAR).as_deref() == Ok(test_path) {
        scenario();
        return;
    }

    let exe = std::env::current_exe().expect("test binary path");
    let output = std::process::Command::new(exe)
        .args(["--exact", test_path, "--nocapture", "--test-threads=1"])
        .env(CHILD_VAR, test_path)
        .output()
        .expect("spawn child test binary");

    assert!(
        !output.status.success(),
        "`{test_path}` was expected to abort but exited normally"
    );

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        const SIGABRT: i32 = 6;
        assert_eq!(
            output.status.signal(),
            Some(SIGABRT),
            "`{test_path}` was expected to abort, got {:?}",
            output.status
        );
    }
}
