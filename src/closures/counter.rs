//! Counter closures that mutate their captured integer.

/// Create a counter starting at zero.
///
/// Each call increments the captured integer by one and returns the new
/// value, so the first call returns `1`.
///
/// # Example
///
/// ```rust
/// use purity::closures::counter;
///
/// let mut next = counter();
/// assert_eq!(next(), 1);
/// assert_eq!(next(), 2);
/// ```
pub fn counter() -> impl FnMut() -> i64 {
    counter_from(0)
}

/// Create a counter whose first call returns `seed + 1`.
///
/// The increment wraps at `i64::MAX`, so consecutive calls never return
/// the same value.
pub fn counter_from(seed: i64) -> impl FnMut() -> i64 {
    let mut count = seed;
    move || {
        count = count.wrapping_add(1);
        count
    }
}
