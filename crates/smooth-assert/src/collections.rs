use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use smooth_core::{CallSite, FailureKind, FailureReport, Rendered};

use crate::reporter::{halt, Reporter};

/// Key-value lookup capability used by [`maps_match`].
pub trait Mapping<K, V> {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the mapping has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Every entry, in the mapping's own iteration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

/// Discrepancies found by one collection assertion.
///
/// In `first` mode the first recorded discrepancy halts immediately; in
/// `all` mode they accumulate and [`Discrepancies::conclude`] halts once
/// with every one listed in the report details.
struct Discrepancies {
    collect: bool,
    found: Vec<FailureReport>,
}

impl Discrepancies {
    fn new<R: Reporter + ?Sized>(t: &R) -> Self {
        Self {
            collect: t.policy().collect_all(),
            found: Vec::new(),
        }
    }

    fn record<R: Reporter + ?Sized>(&mut self, t: &mut R, report: FailureReport) {
        if !self.collect {
            halt(t, report);
        }
        self.found.push(t.policy().shape(report));
    }

    fn conclude<R: Reporter + ?Sized>(self, t: &mut R) {
        let details: Vec<String> = self
            .found
            .iter()
            .map(|report| {
                format!(
                    "{} | Expected: {} | Got: {}",
                    report.description, report.expected, report.got
                )
            })
            .collect();
        if let Some(first) = self.found.into_iter().next() {
            halt(t, first.with_details(details));
        }
    }
}

fn length_mismatch(site: &CallSite, what: &str, expected: usize, got: usize) -> FailureReport {
    FailureReport::new(
        FailureKind::LengthMismatch,
        site.clone(),
        format!("{what} do not match in length."),
        Rendered::of(&expected),
        Rendered::of(&got),
    )
}

/// Asserts that two slices have the same length and equal elements in order.
///
/// Element comparison covers the common prefix when lengths differ.
#[track_caller]
pub fn slices_match<R, T>(t: &mut R, expected: &[T], got: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    let site = CallSite::caller();
    let mut found = Discrepancies::new(t);
    if expected.len() != got.len() {
        found.record(t, length_mismatch(&site, "Slices", expected.len(), got.len()));
    }
    for (idx, (want, have)) in expected.iter().zip(got).enumerate() {
        if want != have {
            found.record(
                t,
                FailureReport::new(
                    FailureKind::ElementMismatch,
                    site.clone(),
                    format!("Values do not match | Index: {idx}"),
                    Rendered::of(want),
                    Rendered::of(have),
                ),
            );
        }
    }
    found.conclude(t);
}

/// Asserts that two slices hold the same elements with the same
/// multiplicities, in any order.
///
/// Each expected element consumes a distinct, unused index of `got`, so two
/// equal expected elements need two equal actual elements.
#[track_caller]
pub fn slices_match_unordered<R, T>(t: &mut R, expected: &[T], got: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    let site = CallSite::caller();
    let mut found = Discrepancies::new(t);
    if expected.len() != got.len() {
        found.record(t, length_mismatch(&site, "Slices", expected.len(), got.len()));
    }

    let mut used = vec![false; got.len()];
    for (idx, want) in expected.iter().enumerate() {
        match (0..got.len()).find(|&slot| !used[slot] && got[slot] == *want) {
            Some(slot) => used[slot] = true,
            None => found.record(
                t,
                FailureReport::new(
                    FailureKind::ElementMismatch,
                    site.clone(),
                    format!("Slice value was not accounted for | Index: {idx}"),
                    Rendered::of(want),
                    Rendered::of(got),
                ),
            ),
        }
    }
    for (slot, have) in got.iter().enumerate().filter(|(slot, _)| !used[*slot]) {
        found.record(
            t,
            FailureReport::new(
                FailureKind::ElementMismatch,
                site.clone(),
                format!("Slice value was not expected | Index: {slot}"),
                Rendered::of(expected),
                Rendered::of(have),
            ),
        );
    }
    found.conclude(t);
}

/// Asserts that two mappings have the same size and that every expected key
/// maps to an equal value in `got`.
#[track_caller]
pub fn maps_match<R, K, V, E, G>(t: &mut R, expected: &E, got: &G)
where
    R: Reporter + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
    E: Mapping<K, V> + ?Sized,
    G: Mapping<K, V> + ?Sized,
{
    let site = CallSite::caller();
    let mut found = Discrepancies::new(t);
    if expected.len() != got.len() {
        found.record(t, length_mismatch(&site, "Maps", expected.len(), got.len()));
    }
    for (key, want) in expected.entries() {
        match got.lookup(key) {
            None => found.record(
                t,
                FailureReport::new(
                    FailureKind::KeyMissing,
                    site.clone(),
                    format!("A key was not found | Key: {key:?}"),
                    Rendered::of(want),
                    Rendered::raw("absent", "nil"),
                ),
            ),
            Some(have) if have != want => found.record(
                t,
                FailureReport::new(
                    FailureKind::ValueMismatch,
                    site.clone(),
                    format!("The values stored in the map did not match | Key: {key:?}"),
                    Rendered::of(want),
                    Rendered::of(have),
                ),
            ),
            Some(_) => {}
        }
    }
    found.conclude(t);
}
