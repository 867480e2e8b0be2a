//! Reconciliation tests through the public API.
//!
//! Uses in-memory stores so every property can be checked without touching
//! the filesystem.

use std::collections::{BTreeMap, BTreeSet};

use localvault::error::ReconcileError;
use localvault::{reconcile, Error, Memory};
use proptest::prelude::*;

fn names(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

#[test]
fn test_disabled_destination_reads_nothing() {
    let source = Memory::new().with_secret("A", "x");

    for force in [false, true] {
        let err = reconcile(&source, None, force).unwrap_err();
        assert!(matches!(
            err,
            Error::Reconcile(ReconcileError::DestinationDisabled)
        ));
    }
    assert_eq!(source.list_calls(), 0);
}

#[test]
fn test_full_overlap_copies_nothing() {
    let source = Memory::new().with_secret("A", "1").with_secret("B", "2");
    let mut local = Memory::new()
        .with_secret("A", "1")
        .with_secret("B", "other")
        .with_secret("EXTRA", "3");

    let outcome = reconcile(&source, Some(&mut local), false).unwrap();

    assert_eq!(names(outcome.skipped()), ["A", "B"]);
    assert!(outcome.copied().is_empty());
    assert!(outcome.failed().is_empty());
    assert!(local.sealed().is_empty());
}

#[test]
fn test_different_value_is_still_skipped() {
    let source = Memory::new().with_secret("TOKEN", "new");
    let mut local = Memory::new().with_secret("TOKEN", "stale");

    let outcome = reconcile(&source, Some(&mut local), false).unwrap();

    assert_eq!(names(outcome.skipped()), ["TOKEN"]);
    assert_eq!(local.get("TOKEN").unwrap().bytes(), Some(&b"stale"[..]));
}

#[test]
fn test_unreadable_destination_entry_does_not_block_copy() {
    let source = Memory::new().with_secret("A", "x");
    let mut local = Memory::new().with_unreadable("A");

    let outcome = reconcile(&source, Some(&mut local), false).unwrap();

    assert!(outcome.skipped().is_empty());
    assert_eq!(names(outcome.copied()), ["A"]);
}

#[test]
fn test_empty_readable_value_is_copied() {
    let source = Memory::new().with_secret("EMPTY", "");
    let mut local = Memory::new();

    let outcome = reconcile(&source, Some(&mut local), false).unwrap();

    assert_eq!(names(outcome.copied()), ["EMPTY"]);
    assert!(outcome.failed().is_empty());
    assert_eq!(local.get("EMPTY").unwrap().bytes(), Some(&b""[..]));
}

#[test]
fn test_empty_source() {
    let source = Memory::new();
    let mut local = Memory::new().with_secret("A", "1");

    let outcome = reconcile(&source, Some(&mut local), false).unwrap();

    assert_eq!(outcome.total_found(), 0);
    assert!(outcome.skipped().is_empty());
    assert!(outcome.failed().is_empty());
    assert!(outcome.copied().is_empty());
}

#[test]
fn test_scenario_without_force() {
    let source = Memory::new()
        .with_secret("A", "x")
        .with_unreadable("B")
        .with_secret("C", "z");
    let mut local = Memory::new().with_secret("A", "old");

    let outcome = reconcile(&source, Some(&mut local), false).unwrap();

    assert_eq!(names(outcome.skipped()), ["A"]);
    assert!(outcome.failed().contains_key("B"));
    assert_eq!(names(outcome.copied()), ["C"]);
    assert_eq!(local.names(), ["A", "C"]);
    assert_eq!(local.get("A").unwrap().bytes(), Some(&b"old"[..]));
    assert_eq!(local.get("C").unwrap().bytes(), Some(&b"z"[..]));
}

#[test]
fn test_scenario_with_force() {
    let source = Memory::new()
        .with_secret("A", "x")
        .with_unreadable("B")
        .with_secret("C", "z");
    let mut local = Memory::new().with_secret("A", "old");

    let outcome = reconcile(&source, Some(&mut local), true).unwrap();

    assert!(outcome.skipped().is_empty());
    assert!(outcome.failed().contains_key("B"));
    assert_eq!(names(outcome.copied()), ["A", "C"]);
    assert_eq!(local.get("A").unwrap().bytes(), Some(&b"x"[..]));
    assert_eq!(local.get("C").unwrap().bytes(), Some(&b"z"[..]));
}

/// Source entry: `Some(value)` is readable, `None` is unreadable.
fn store_strategy() -> impl Strategy<Value = BTreeMap<String, Option<String>>> {
    prop::collection::btree_map("[A-F]", prop::option::weighted(0.8, "[a-z]{0,4}"), 0..6)
}

fn build(entries: &BTreeMap<String, Option<String>>) -> Memory {
    entries
        .iter()
        .fold(Memory::new(), |store, (name, value)| match value {
            Some(v) => store.with_secret(name, v.as_str()),
            None => store.with_unreadable(name),
        })
}

proptest! {
    #[test]
    fn prop_outcome_partitions_source(
        source_entries in store_strategy(),
        local_entries in store_strategy(),
        force in any::<bool>(),
    ) {
        let source = build(&source_entries);
        let mut local = build(&local_entries);
        let local_readable: BTreeSet<&String> = local_entries
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| k)
            .collect();

        let outcome = reconcile(&source, Some(&mut local), force).unwrap();

        let skipped: BTreeSet<&String> = outcome.skipped().iter().collect();
        let failed: BTreeSet<&String> = outcome.failed().keys().collect();
        let copied: BTreeSet<&String> = outcome.copied().iter().collect();

        prop_assert!(skipped.is_disjoint(&failed));
        prop_assert!(skipped.is_disjoint(&copied));
        prop_assert!(failed.is_disjoint(&copied));
        prop_assert_eq!(
            outcome.total_found(),
            skipped.len() + failed.len() + copied.len()
        );

        for (name, value) in &source_entries {
            let expect_skip = !force && local_readable.contains(name);
            prop_assert_eq!(skipped.contains(name), expect_skip);
            if !expect_skip {
                prop_assert_eq!(failed.contains(name), value.is_none());
                prop_assert_eq!(copied.contains(name), value.is_some());
            }
        }

        // Only copied names were ever written.
        let sealed: BTreeSet<&String> = local.sealed().iter().collect();
        prop_assert_eq!(sealed, copied);
        if force {
            prop_assert_eq!(local.list_calls(), 0);
        }
    }
}
