//! Closure factories over owned state.
//!
//! This module contrasts two kinds of closures:
//! - Stateful closures that mutate what they captured (`counter`, `getter`)
//! - Pure closures that only read what they captured (`constant`)
//!
//! Every factory call produces an independently owned state cell. Two
//! closures never share state unless they come from the same call.

mod constant;
mod counter;
mod getter;
mod probe;

pub use constant::constant;
pub use counter::{counter, counter_from};
pub use getter::{getter, Getter};
pub use probe::{call_twice, is_referentially_stable};
