//! The standard checks, one per script block.

use super::config::ScriptConfig;
use super::error::CheckError;
use crate::check;
use crate::closures::{constant, counter_from, getter, is_referentially_stable};
use crate::combinators::{identity, one, reciprocal, Value};

/// Two calls of a counter closure differ.
pub fn counter(config: &ScriptConfig) -> Result<(), CheckError> {
    let mut badcode = counter_from(config.counter_seed);
    check!(badcode() != badcode())?;
    Ok(())
}

/// Two calls of a getter record's `getbad` differ.
pub fn getter_record(config: &ScriptConfig) -> Result<(), CheckError> {
    let mut my_badcode = getter(config.object_seed);
    check!(my_badcode.getbad() != my_badcode.getbad())?;
    Ok(())
}

/// Calls of a constant closure agree with each other and with the captured value.
pub fn pure_constant(config: &ScriptConfig) -> Result<(), CheckError> {
    let my_not_bad = constant(config.constant);
    check!(my_not_bad() == my_not_bad())?;
    check!(is_referentially_stable(&my_not_bad, config.stability_calls))?;
    check!(my_not_bad() == config.constant)?;
    Ok(())
}

/// `S(K)(K)` returns its argument, numbers and functions alike.
pub fn identity_combinator(config: &ScriptConfig) -> Result<(), CheckError> {
    let i = identity()?;
    let v = Value::from(config.probes[0]);
    check!(i.apply(v.clone())? == v)?;

    let f = reciprocal();
    check!(i.apply(f.clone())? == f)?;
    Ok(())
}

/// `Y(x => 1/x)` gives different outcomes for the two probes.
pub fn fixed_point(config: &ScriptConfig) -> Result<(), CheckError> {
    let one = one()?;
    let [a, b] = config.probes;
    tracing::debug!(
        probe = a,
        outcome = ?one.apply(a),
        "one applied to first probe"
    );
    tracing::debug!(
        probe = b,
        outcome = ?one.apply(b),
        "one applied to second probe"
    );
    check!(one.apply(a) != one.apply(b))?;
    Ok(())
}
