//! Canonical ordering of a note collection.

use crate::domain::Note;
use std::cmp::Ordering;

/// Compares two notes in canonical order: higher priority first, then
/// contents in ascending byte order.
pub fn canonical_cmp(a: &Note, b: &Note) -> Ordering {
    b.priority()
        .cmp(&a.priority())
        .then_with(|| a.contents().cmp(b.contents()))
}

/// Sorts `notes` into canonical order in place.
///
/// The sort is stable, so notes that tie on both keys keep their relative
/// order and normalizing an already normalized collection changes nothing.
pub fn normalize(notes: &mut [Note]) {
    notes.sort_by(canonical_cmp);
}

/// Returns true if `notes` is already in canonical order.
#[cfg(test)]
fn is_normalized(notes: &[Note]) -> bool {
    notes
        .windows(2)
        .all(|pair| canonical_cmp(&pair[0], &pair[1]) != Ordering::Greater)
}
