//! Caret reconciliation across reformatting.
//!
//! When the field is reformatted, separators appear and disappear in front of
//! the caret. Left alone, the caret would stay at the same numeric index and
//! visually jump into the neighbouring digit group. [`reconcile_cursor`] shifts
//! it by the change in separators that precede it.
//!
//! Offsets are char indices, not byte indices.

use crate::format::separators_before;

/// Computes the caret offset in `new_formatted` that corresponds to
/// `old_offset` in `old_raw`.
///
/// `old_raw` is the field value as the user left it (before formatting) and
/// `old_offset` the caret within it. The caret is shifted once by
/// `(separators before it in new) - (separators before it in old)`, both
/// counted over the first `old_offset` chars, and clamped into
/// `0..=new_formatted.chars().count()`.
///
/// A single shift only sees separators in front of the original offset. Use
/// [`settle_cursor`] when one edit can add several of them ahead of the caret.
///
/// # Example
///
/// ```
/// use card_field::cursor::reconcile_cursor;
///
/// // Fifth digit typed at the end: a separator appears before the caret.
/// assert_eq!(reconcile_cursor("41111", 5, "4111 1"), 6);
///
/// // Caret at a group boundary stays at the boundary.
/// assert_eq!(reconcile_cursor("4111 111", 4, "4111 1111"), 4);
/// ```
pub fn reconcile_cursor(old_raw: &str, old_offset: usize, new_formatted: &str) -> usize {
    let old_offset = old_offset.min(old_raw.chars().count());
    shift(old_raw, old_offset, new_formatted, old_offset).min(new_formatted.chars().count())
}

/// Like [`reconcile_cursor`], but re-applies the shift from the shifted
/// position until it settles.
///
/// The first pass is exactly [`reconcile_cursor`]. Later passes pick up
/// separators the caret moved past, so a paste lands after the same digit.
/// This is what the pipeline and [`EditSession`](crate::EditSession) use.
///
/// # Example
///
/// ```
/// use card_field::cursor::{reconcile_cursor, settle_cursor};
///
/// // Nine pasted digits gain two separators.
/// assert_eq!(settle_cursor("411111111", 9, "4111 1111 1"), 11);
/// assert_eq!(reconcile_cursor("411111111", 9, "4111 1111 1"), 10);
/// ```
pub fn settle_cursor(old_raw: &str, old_offset: usize, new_formatted: &str) -> usize {
    let old_offset = old_offset.min(old_raw.chars().count());

    // Monotone and bounded by the separator count, so this terminates
    let mut cursor = shift(old_raw, old_offset, new_formatted, old_offset);
    loop {
        let next = shift(old_raw, old_offset, new_formatted, cursor);
        if next == cursor {
            break;
        }
        cursor = next;
    }

    cursor.min(new_formatted.chars().count())
}

/// `old_offset` shifted by the new separators before `at`.
fn shift(old_raw: &str, old_offset: usize, new_formatted: &str, at: usize) -> usize {
    (old_offset + separators_before(new_formatted, at))
        .saturating_sub(separators_before(old_raw, old_offset))
}
