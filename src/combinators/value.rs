//! The dynamic value every combinator term evaluates to.

use super::error::ApplyError;
use std::fmt;
use std::sync::Arc;

type Body = Arc<dyn Fn(Value) -> Result<Value, ApplyError> + Send + Sync>;

/// A function value with a label for diagnostics.
///
/// Functions compare by identity: two `Function`s are equal only when they
/// share the same allocation.
#[derive(Clone)]
pub struct Function {
    label: &'static str,
    body: Body,
}

impl Function {
    /// Create a function value from a closure.
    pub fn new<F>(label: &'static str, body: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ApplyError> + Send + Sync + 'static,
    {
        Function {
            label,
            body: Arc::new(body),
        }
    }

    /// The label given at construction.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Apply the function to an argument.
    pub fn call(&self, arg: Value) -> Result<Value, ApplyError> {
        (self.body)(arg)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.label)
    }
}

/// An untyped term: a number or a function.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Function(Function),
}

impl Value {
    /// Wrap a closure as a function value.
    pub fn function<F>(label: &'static str, body: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ApplyError> + Send + Sync + 'static,
    {
        Value::Function(Function::new(label, body))
    }

    /// Apply this value to `arg`.
    ///
    /// Fails with [`ApplyError::NotAFunction`] when `self` is a number.
    pub fn apply(&self, arg: impl Into<Value>) -> Result<Value, ApplyError> {
        match self {
            Value::Function(function) => function.call(arg.into()),
            Value::Number(value) => Err(ApplyError::NotAFunction { value: *value }),
        }
    }

    /// The number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            Value::Function(_) => None,
        }
    }

    /// Whether this is a function value.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{value}"),
            Value::Function(function) => write!(f, "{function:?}"),
        }
    }
}
