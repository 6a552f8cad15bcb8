//! Unit tests for unique id generation.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rstest::rstest;
use underbars::ident::{IdGenerator, unique_id};

// =============================================================================
// IdGenerator
// =============================================================================

#[rstest]
fn test_generator_counts_from_one() {
    let generator = IdGenerator::new();
    assert_eq!(generator.unique_id(None), "1");
    assert_eq!(generator.unique_id(None), "2");
    assert_eq!(generator.unique_id(None), "3");
}

#[rstest]
fn test_prefixed_and_plain_ids_share_one_sequence() {
    let generator = IdGenerator::new();
    assert_eq!(generator.unique_id(Some("option_")), "option_1");
    assert_eq!(generator.unique_id(None), "2");
    assert_eq!(generator.unique_id(Some("menu_")), "menu_3");
}

#[rstest]
fn test_generators_do_not_share_counters() {
    let left = IdGenerator::new();
    let right = IdGenerator::new();
    assert_eq!(left.unique_id(None), "1");
    assert_eq!(left.unique_id(None), "2");
    assert_eq!(right.unique_id(None), "1");
}

#[rstest]
fn test_concurrent_callers_never_collide() {
    let generator = Arc::new(IdGenerator::new());
    let mut workers = Vec::new();
    for _ in 0..8 {
        let generator = Arc::clone(&generator);
        workers.push(thread::spawn(move || {
            (0..250)
                .map(|_| generator.unique_id(Some("tid_")))
                .collect::<Vec<_>>()
        }));
    }

    let mut all_ids = HashSet::new();
    for worker in workers {
        for id in worker.join().unwrap() {
            assert!(all_ids.insert(id), "duplicate id handed out");
        }
    }
    assert_eq!(all_ids.len(), 8 * 250);
}

// =============================================================================
// Process-wide unique_id
// =============================================================================

// Kept to a single test so nothing else races the shared counter while
// the suffix arithmetic is asserted.
#[rstest]
fn test_process_wide_ids_form_one_increasing_sequence() {
    let plain = unique_id(None);
    let prefixed = unique_id(Some("id_"));

    let first: u64 = plain.parse().unwrap();
    let second: u64 = prefixed
        .strip_prefix("id_")
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(second, first + 1);
    assert_ne!(plain, prefixed);
}
