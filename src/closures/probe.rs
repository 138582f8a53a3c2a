//! Probes that observe whether a closure is referentially stable.

/// Call `f` twice and return both results in call order.
pub fn call_twice<T, F>(mut f: F) -> (T, T)
where
    F: FnMut() -> T,
{
    let first = f();
    let second = f();
    (first, second)
}

/// Call `f` `calls` times and report whether every result equals the first.
///
/// Zero or one call is trivially stable.
///
/// # Example
///
/// ```rust
/// use purity::closures::{constant, counter, is_referentially_stable};
///
/// assert!(is_referentially_stable(constant(5), 10));
/// assert!(!is_referentially_stable(counter(), 2));
/// ```
pub fn is_referentially_stable<T, F>(mut f: F, calls: usize) -> bool
where
    T: PartialEq,
    F: FnMut() -> T,
{
    if calls == 0 {
        return true;
    }
    let first = f();
    (1..calls).all(|_| f() == first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closures::{constant, counter, getter};

    #[test]
    fn call_twice_preserves_order() {
        assert_eq!(call_twice(counter()), (1, 2));
    }

    #[test]
    fn constant_is_stable() {
        assert!(is_referentially_stable(constant(5), 50));
    }

    #[test]
    fn counter_is_not_stable() {
        assert!(!is_referentially_stable(counter(), 2));
    }

    #[test]
    fn getter_is_not_stable() {
        let mut record = getter(123);
        assert!(!is_referentially_stable(|| record.getbad(), 2));
    }

    #[test]
    fn single_call_is_trivially_stable() {
        assert!(is_referentially_stable(counter(), 0));
        assert!(is_referentially_stable(counter(), 1));
    }
}
