use std::fmt::{Debug, LowerExp};

use smooth_core::{CallSite, FailureKind, FailureReport, Rendered};

use crate::reporter::{halt, Reporter};

/// Floating point types accepted by [`eq_float`].
pub trait Float: Copy + Debug + LowerExp {
    /// Whether `self` and `other` are at most `eps` apart.
    ///
    /// NaN on either side is never within tolerance.
    fn within(self, other: Self, eps: Self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                fn within(self, other: Self, eps: Self) -> bool {
                    (self - other).abs() <= eps
                }
            }
        )*
    };
}

impl_float!(f32, f64);

fn mismatch(
    site: CallSite,
    description: impl Into<String>,
    expected: Rendered,
    got: Rendered,
) -> FailureReport {
    FailureReport::new(FailureKind::ValueMismatch, site, description, expected, got)
}

/// Asserts `expected == got`.
#[track_caller]
pub fn eq<R, T>(t: &mut R, expected: T, got: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    let site = CallSite::caller();
    if expected != got {
        halt(
            t,
            mismatch(
                site,
                "The supplied values were not equal but were expected to be.",
                Rendered::of(&expected),
                Rendered::of(&got),
            ),
        );
    }
}

/// Asserts that `expected` equals at least one of `candidates`.
#[track_caller]
pub fn eq_one_of<R, T>(t: &mut R, expected: T, candidates: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    let site = CallSite::caller();
    if !candidates.iter().any(|candidate| *candidate == expected) {
        halt(
            t,
            mismatch(
                site,
                "The supplied value is not in the supplied slice.",
                Rendered::of(&expected),
                Rendered::of(candidates),
            ),
        );
    }
}

/// Asserts that `got` lies within `eps` of `expected`, by absolute difference.
#[track_caller]
pub fn eq_float<R, F>(t: &mut R, expected: F, got: F, eps: F)
where
    R: Reporter + ?Sized,
    F: Float,
{
    let site = CallSite::caller();
    if !expected.within(got, eps) {
        halt(
            t,
            mismatch(
                site,
                format!(
                    "The supplied float was not within the expected range of {eps:e} to be considered equal."
                ),
                Rendered::of(&expected),
                Rendered::of(&got),
            ),
        );
    }
}

/// Asserts that `cmp(&expected, &got)` holds.
#[track_caller]
pub fn eq_by<R, T, C>(t: &mut R, expected: T, got: T, cmp: C)
where
    R: Reporter + ?Sized,
    T: Debug,
    C: FnOnce(&T, &T) -> bool,
{
    let site = CallSite::caller();
    if !cmp(&expected, &got) {
        halt(
            t,
            mismatch(
                site,
                "The supplied values were not equal as defined by the supplied comparison function but were expected to be.",
                Rendered::of(&expected),
                Rendered::of(&got),
            ),
        );
    }
}

/// Asserts `expected != got`.
#[track_caller]
pub fn neq<R, T>(t: &mut R, expected: T, got: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    let site = CallSite::caller();
    if expected == got {
        halt(
            t,
            mismatch(
                site,
                "The supplied values were equal but were expected to not be.",
                Rendered::of(&expected),
                Rendered::of(&got),
            ),
        );
    }
}

/// Asserts that `v` is `true`.
///
/// Meant for predicates; prefer [`eq`] for comparing values.
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(t: &mut R, v: bool) {
    let site = CallSite::caller();
    if !v {
        halt(
            t,
            FailureReport::new(
                FailureKind::BooleanMismatch,
                site,
                "The supplied value was not true when it was expected to be.",
                Rendered::of(&true),
                Rendered::of(&v),
            ),
        );
    }
}

/// Asserts that `v` is `false`.
#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(t: &mut R, v: bool) {
    let site = CallSite::caller();
    if v {
        halt(
            t,
            FailureReport::new(
                FailureKind::BooleanMismatch,
                site,
                "The supplied value was not false when it was expected to be.",
                Rendered::of(&false),
                Rendered::of(&v),
            ),
        );
    }
}
