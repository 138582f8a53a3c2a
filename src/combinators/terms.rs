//! The K, S, I and Y combinators, and the `x => 1/x` primitive.

use super::error::ApplyError;
use super::value::Value;

/// K(x) returns a function that ignores its argument and returns x.
pub fn k() -> Value {
    Value::function("K", |x| {
        Ok(Value::function("K(x)", move |_| Ok(x.clone())))
    })
}

/// S(a)(b)(c) returns a(c)(b(c)).
///
/// Evaluation is strict and left to right: a(c) is computed first, then
/// b(c), then the application of one to the other.
pub fn s() -> Value {
    Value::function("S", |a| {
        Ok(Value::function("S(a)", move |b| {
            let a = a.clone();
            Ok(Value::function("S(a)(b)", move |c| {
                let head = a.apply(c.clone())?;
                let arg = b.apply(c)?;
                head.apply(arg)
            }))
        }))
    })
}

/// I, derived as S(K)(K).
///
/// ```rust
/// use purity::combinators::{identity, Value};
///
/// let i = identity().unwrap();
/// assert_eq!(i.apply(7).unwrap(), Value::Number(7.0));
/// ```
pub fn identity() -> Result<Value, ApplyError> {
    s().apply(k())?.apply(k())
}

/// Y, built only from S and K:
/// `S(K)(K)(S(K(S(S)(S(S(S)(K)))))(K))`.
pub fn y() -> Result<Value, ApplyError> {
    let s_s_k = s().apply(s())?.apply(k())?;
    let s_s_s_k = s().apply(s_s_k)?;
    let spine = s().apply(s())?.apply(s_s_s_k)?;
    let body = s().apply(k().apply(spine)?)?.apply(k())?;
    identity()?.apply(body)
}

/// The mapping `x => 1/x`.
pub fn reciprocal() -> Value {
    Value::function("reciprocal", |x| match x {
        Value::Number(n) => Ok(Value::Number(1.0 / n)),
        Value::Function(function) => Err(ApplyError::NotANumber {
            operation: "reciprocal",
            function: function.label(),
        }),
    })
}
