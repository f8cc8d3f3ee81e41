use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use smooth_core::{CallSite, FailureKind, FailureReport, Rendered};

use crate::reporter::{halt, Reporter};
use crate::unit::is_halt;

/// Text carried by a panic payload, when it is a string.
pub(crate) fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

/// Asserts that `action` panics.
///
/// The unwind is caught here, so the calling test keeps running. A
/// [`TestUnit`](crate::TestUnit) halting inside `action` is not a panic and
/// keeps unwinding.
#[track_caller]
pub fn panics<R, F>(t: &mut R, action: F)
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    let site = CallSite::caller();
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Err(payload) if is_halt(payload.as_ref()) => panic::resume_unwind(payload),
        Err(_) => {}
        Ok(()) => halt(
            t,
            FailureReport::new(
                FailureKind::MissingPanic,
                site,
                "The supplied function did not panic when it should have.",
                Rendered::raw("panic", "panic"),
                Rendered::raw("()", "returned"),
            ),
        ),
    }
}

/// Asserts that `action` completes without panicking.
///
/// A panic from `action` is caught and turned into a failure report rather
/// than propagated.
#[track_caller]
pub fn no_panic<R, F>(t: &mut R, action: F)
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    let site = CallSite::caller();
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
        if is_halt(payload.as_ref()) {
            panic::resume_unwind(payload);
        }
        let message = payload_message(payload.as_ref());
        halt(
            t,
            FailureReport::new(
                FailureKind::UnexpectedPanic,
                site,
                "The supplied function panicked when it shouldn't have.",
                Rendered::raw("()", "returned"),
                Rendered::raw("panic", message),
            ),
        );
    }
}
