use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Debug};
use std::rc::Rc;
use std::sync::Arc;

use smooth_core::{CallSite, FailureKind, FailureReport, Rendered};

use crate::reporter::{halt, Reporter};

/// Capability for values that can hold nothing.
///
/// Three shapes of nothing are covered: absent optionals and null pointers,
/// empty containers, and wrappers whose held value is itself absent. Wrappers
/// delegate one layer at a time, so `Box<dyn Absent>` holding `None` is
/// absent. Scalars do not implement the trait; zero is a value.
pub trait Absent {
    /// Whether the value holds nothing.
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Absent for *const T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Absent for *mut T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

macro_rules! impl_absent_when_empty {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Absent for $ty {
                fn is_absent(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_absent_when_empty!(
    [] str,
    [] String,
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
);

macro_rules! impl_absent_delegate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Absent + ?Sized> Absent for $ty {
                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }
            }
        )*
    };
}

impl_absent_delegate!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl Debug for dyn Absent + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("dyn Absent")
            .field("absent", &self.is_absent())
            .finish()
    }
}

/// Asserts that `value` holds nothing.
#[track_caller]
pub fn is_nil<R, T>(t: &mut R, value: &T)
where
    R: Reporter + ?Sized,
    T: Absent + Debug + ?Sized,
{
    let site = CallSite::caller();
    if !value.is_absent() {
        halt(
            t,
            FailureReport::new(
                FailureKind::NilExpected,
                site,
                "The supplied value was not nil when it was expected to be.",
                Rendered::raw("absent", "nil"),
                Rendered::of(value),
            ),
        );
    }
}

/// Asserts that `value` holds something.
#[track_caller]
pub fn is_not_nil<R, T>(t: &mut R, value: &T)
where
    R: Reporter + ?Sized,
    T: Absent + Debug + ?Sized,
{
    let site = CallSite::caller();
    if value.is_absent() {
        halt(
            t,
            FailureReport::new(
                FailureKind::NonNilExpected,
                site,
                "The supplied value was nil when it was not expected to be.",
                Rendered::raw("present", "!nil"),
                Rendered::of(value),
            ),
        );
    }
}
