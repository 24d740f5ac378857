//! Grow/shrink regression tests
//!
//! Morphological closing is not invertible, so grow-then-shrink is not
//! expected to reproduce the input; it is expected to stabilize after
//! the first round.

use derma_morph::{grow, grow_shrink, shrink};
use derma_test::checkerboard_mask;

#[test]
fn grow_then_shrink_is_stable_not_invertible() {
    let original = checkerboard_mask(8, 8);

    let mut round1 = original.clone();
    grow(&mut round1, 1, 1).unwrap();
    shrink(&mut round1, 1, 1).unwrap();

    // the checkerboard does not come back
    assert_ne!(round1, original);

    // a second identical round changes nothing
    let mut round2 = round1.clone();
    grow(&mut round2, 1, 1).unwrap();
    shrink(&mut round2, 1, 1).unwrap();
    assert_eq!(round2, round1);
}

#[test]
fn fixed_cycle_matches_manual_interleaving() {
    let original = checkerboard_mask(10, 6);

    let mut cycled = original.clone();
    grow_shrink(&mut cycled, 3, 1, true).unwrap();

    let mut manual = original;
    for _ in 0..3 {
        grow(&mut manual, 1, 1).unwrap();
        shrink(&mut manual, 1, 1).unwrap();
    }

    assert_eq!(cycled, manual);
}

#[test]
fn shrink_first_cycle_clears_checkerboard() {
    // isolated single pixels cannot survive an erosion-first cycle
    let mut mask = checkerboard_mask(8, 8);
    grow_shrink(&mut mask, 1, 1, false).unwrap();
    assert_eq!(mask.count_foreground(), 0);
}
