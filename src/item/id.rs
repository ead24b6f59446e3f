//! Item id generation.
//!
//! Ids keep the creation-timestamp shape (milliseconds since the epoch) but
//! are bumped past the largest id already stored, so two items created in
//! the same millisecond, or after a clock step backwards, never collide.

use std::collections::HashSet;

use super::FoodItem;

/// Next free id: `now_ms`, or one past the largest existing id if that is
/// not strictly smaller.
///
/// When the largest id is already `i64::MAX` there is nothing past it, so
/// the first unused id from `now_ms` upwards (wrapping) is taken instead.
#[must_use]
pub fn next_item_id(now_ms: i64, existing: &[FoodItem]) -> i64 {
    let Some(max) = existing.iter().map(|item| item.id).max() else {
        return now_ms;
    };
    match max.checked_add(1) {
        Some(next) => now_ms.max(next),
        None => first_free_id(now_ms, existing),
    }
}

fn first_free_id(from: i64, existing: &[FoodItem]) -> i64 {
    let taken: HashSet<i64> = existing.iter().map(|item| item.id).collect();
    (from..=i64::MAX)
        .chain(i64::MIN..from)
        .find(|id| !taken.contains(id))
        .unwrap_or(from)
}
