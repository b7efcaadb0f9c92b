// Host-side tests for page constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(REVEAL_DURATION_SEC > 0.0);
    assert!(LETTER_DURATION_SEC > 0.0);
    assert!(LETTER_STAGGER_SEC < LETTER_DURATION_SEC);
    assert!(CARD_STAGGER_SEC < REVEAL_DURATION_SEC);
    assert!(CALLOUT_DELAY_SEC < REVEAL_DURATION_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_settings_in_range() {
    assert!(BLOOM_STRENGTH > 0.0 && BLOOM_STRENGTH <= 2.0);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.5);
    assert!(EXPOSURE > 0.0);
    assert!(CAMERA_Z > 0.0);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, SECTIONS_ID, NAV_ID, PROGRESS_BAR_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
