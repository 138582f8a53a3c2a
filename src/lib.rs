//! Purity: stateful and pure closures, side by side
//!
//! Purity is a set of small, executable examples of closure semantics.
//! A closure that mutates what it captured gives a different answer on every
//! call; a closure that only reads what it captured always gives the same
//! one. The same contrast is then pushed into untyped combinators, where a
//! fixed point built only from S and K still fails to settle.
//!
//! # Core Concepts
//!
//! - **Closures**: counter, getter record and constant factories
//! - **Combinators**: an untyped `Value` with K, S, I and Y built on it
//! - **Assertions**: `check!` returns `Err(AssertionFailed)` instead of panicking
//! - **Script**: the examples as an ordered run that stops at the first failure
//!
//! # Example
//!
//! ```rust
//! use purity::closures::{constant, counter};
//! use purity::combinators::one;
//! use purity::script::{Script, ScriptConfig};
//!
//! let mut badcode = counter();
//! assert_ne!(badcode(), badcode());
//!
//! let not_bad = constant(5);
//! assert_eq!(not_bad(), not_bad());
//!
//! let one = one().unwrap();
//! assert_ne!(one.apply(3), one.apply(5));
//!
//! let report = Script::standard().run(&ScriptConfig::default()).unwrap();
//! assert_eq!(report.checks.len(), 5);
//! ```

pub mod assertion;
pub mod closures;
pub mod combinators;
pub mod script;

// Re-export commonly used types
pub use assertion::AssertionFailed;
pub use combinators::{ApplyError, Value};
pub use script::{Script, ScriptConfig, ScriptError, ScriptReport};
