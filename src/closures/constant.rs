//! Pure closures that return their captured value unchanged.

/// Create a closure that always returns `x`.
///
/// The closure only reads what it captured, so it is referentially
/// stable for its whole lifetime.
///
/// # Example
///
/// ```rust
/// use purity::closures::constant;
///
/// let five = constant(5);
/// assert_eq!(five(), five());
/// assert_eq!(five(), 5);
/// ```
pub fn constant<T: Clone>(x: T) -> impl Fn() -> T {
    move || x.clone()
}
