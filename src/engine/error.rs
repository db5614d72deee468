//! Error values. Failures inside the language are ordinary `Object::Error`
//! values; the enums here only exist to keep the message text in one place.

use crate::engine::object::Object;
use std::fmt;
use thiserror::Error;

/// Validation failures reported by builtin functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },
    #[error("argument to `{function}` not supported, got {found}")]
    UnsupportedArgument {
        function: &'static str,
        found: &'static str,
    },
}

/// Failures raised by the evaluator while resolving and calling things.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    #[error("not a function: {0}")]
    NotAFunction(&'static str),
}

/// Builds an `Object::Error` carrying the rendered message.
pub fn new_error(message: impl fmt::Display) -> Object {
    Object::Error(message.to_string())
}

impl From<BuiltinError> for Object {
    fn from(err: BuiltinError) -> Self {
        new_error(err)
    }
}

impl From<EvalError> for Object {
    fn from(err: EvalError) -> Self {
        new_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;

    #[test]
    fn arity_message_format() {
        init_test_logging();
        let err = BuiltinError::WrongArgumentCount { got: 0, want: 1 };
        assert_eq!(err.to_string(), "wrong number of arguments. got=0, want=1");
    }

    #[test]
    fn unsupported_argument_message_format() {
        init_test_logging();
        let err = BuiltinError::UnsupportedArgument {
            function: "len",
            found: "INTEGER",
        };
        assert_eq!(
            Object::from(err),
            Object::Error("argument to `len` not supported, got INTEGER".to_string())
        );
    }

    #[test]
    fn eval_errors_become_error_objects() {
        init_test_logging();
        assert_eq!(
            Object::from(EvalError::IdentifierNotFound("foo".to_string())).inspect(),
            "ERROR: identifier not found: foo"
        );
        assert_eq!(
            new_error(EvalError::NotAFunction("INTEGER")),
            Object::Error("not a function: INTEGER".to_string())
        );
    }
}
