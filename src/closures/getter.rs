//! A record that packages mutable closure state behind a named capability.

use std::fmt;

/// Record exposing a single stateful capability, `getbad`.
///
/// Wrapping the closure in a named method does not change its contract:
/// every call mutates the captured value, so two calls never agree.
///
/// # Example
///
/// ```rust
/// use purity::closures::getter;
///
/// let mut record = getter(123);
/// assert_eq!(record.getbad(), 124);
/// assert_ne!(record.getbad(), record.getbad());
/// ```
pub struct Getter {
    getbad: Box<dyn FnMut() -> i64 + Send>,
}

impl Getter {
    /// Wrap any nullary closure as the record's capability.
    pub fn new<F>(getbad: F) -> Self
    where
        F: FnMut() -> i64 + Send + 'static,
    {
        Getter {
            getbad: Box::new(getbad),
        }
    }

    /// Increment the captured value and return it.
    pub fn getbad(&mut self) -> i64 {
        (self.getbad)()
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter").finish_non_exhaustive()
    }
}

/// Build a `Getter` whose value is seeded from `x`.
pub fn getter(x: i64) -> Getter {
    let mut y = x;
    Getter::new(move || {
        y = y.wrapping_add(1);
        y
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getbad_differs_between_calls() {
        let mut record = getter(123);
        let first = record.getbad();
        let second = record.getbad();

        assert_ne!(first, second);
    }

    #[test]
    fn getbad_increments_from_seed() {
        let mut record = getter(123);

        assert_eq!(record.getbad(), 124);
        assert_eq!(record.getbad(), 125);
    }

    #[test]
    fn records_are_independent() {
        let mut a = getter(0);
        let mut b = getter(0);

        a.getbad();
        a.getbad();

        assert_eq!(b.getbad(), 1);
    }

    #[test]
    fn new_accepts_any_closure() {
        let mut calls = 0;
        let mut record = Getter::new(move || {
            calls += 10;
            calls
        });

        assert_eq!(record.getbad(), 10);
        assert_eq!(record.getbad(), 20);
    }
}
