use std::any::type_name;
use std::error::Error;
use std::iter;

use smooth_core::{CallSite, FailureKind, FailureReport, Rendered};

use crate::reporter::{halt, Reporter};

/// Iterates `err` followed by every error in its `source()` chain.
pub fn causes<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    iter::successors(Some(err), |&cause| cause.source())
}

fn render_chain(err: &(dyn Error + 'static)) -> Rendered {
    let text = causes(err)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");
    Rendered::raw("dyn Error", text)
}

fn chain_miss(site: CallSite, expected: Rendered, got: &(dyn Error + 'static)) -> FailureReport {
    FailureReport::new(
        FailureKind::ErrorChainMiss,
        site,
        "The expected error was not contained in the given error.",
        expected,
        render_chain(got),
    )
}

/// Asserts that an error equal to `expected` occurs anywhere in `got`'s
/// source chain, `got` itself included.
#[track_caller]
pub fn contains_error<R, E>(t: &mut R, expected: &E, got: &(dyn Error + 'static))
where
    R: Reporter + ?Sized,
    E: Error + PartialEq + 'static,
{
    let site = CallSite::caller();
    if !causes(got).any(|cause| cause.downcast_ref::<E>() == Some(expected)) {
        halt(t, chain_miss(site, Rendered::of(expected), got));
    }
}

/// Asserts that some error of type `E` occurs anywhere in `got`'s source
/// chain, whatever its value.
#[track_caller]
pub fn contains_error_type<E, R>(t: &mut R, got: &(dyn Error + 'static))
where
    E: Error + 'static,
    R: Reporter + ?Sized,
{
    let site = CallSite::caller();
    if !causes(got).any(|cause| cause.is::<E>()) {
        halt(
            t,
            chain_miss(site, Rendered::raw(type_name::<E>(), "<any value>"), got),
        );
    }
}
