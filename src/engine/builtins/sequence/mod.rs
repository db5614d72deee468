//! Builtins over arrays and strings: `len`, `first`, `last`, `rest`, `push`.
//!
//! Strings are measured and sliced by `char`. Arrays are never mutated; `rest`
//! and `push` allocate a fresh backing slice for their result.

use crate::engine::builtins::{check_arity, unsupported};
use crate::engine::error::BuiltinError;
use crate::engine::object::Object;
use std::io::Write;
use tracing::{debug, instrument, trace};

/// Number of elements in an array, or of `char`s in a string. For non-ASCII
/// text this differs from a byte length: `len("héllo")` is 5, not 6.
#[instrument(skip(args, _out), ret, err)]
pub fn native_len(args: Vec<Object>, _out: &mut dyn Write) -> Result<Object, BuiltinError> {
    trace!("Executing native 'len' function");
    check_arity("len", &args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(Object::Integer(elements.len() as i64)),
        Object::String(value) => Ok(Object::Integer(value.chars().count() as i64)),
        other => Err(unsupported("len", other)),
    }
}

#[instrument(skip(args, _out), ret, err)]
pub fn native_first(args: Vec<Object>, _out: &mut dyn Write) -> Result<Object, BuiltinError> {
    trace!("Executing native 'first' function");
    check_arity("first", &args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or(Object::Null)),
        Object::String(value) => Ok(value
            .chars()
            .next()
            .map_or(Object::Null, |c| Object::string(c.to_string()))),
        other => Err(unsupported("first", other)),
    }
}

#[instrument(skip(args, _out), ret, err)]
pub fn native_last(args: Vec<Object>, _out: &mut dyn Write) -> Result<Object, BuiltinError> {
    trace!("Executing native 'last' function");
    check_arity("last", &args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or(Object::Null)),
        Object::String(value) => Ok(value
            .chars()
            .next_back()
            .map_or(Object::Null, |c| Object::string(c.to_string()))),
        other => Err(unsupported("last", other)),
    }
}

/// Everything but the first element or character. Empty input yields `null`,
/// not an empty collection.
#[instrument(skip(args, _out), ret, err)]
pub fn native_rest(args: Vec<Object>, _out: &mut dyn Write) -> Result<Object, BuiltinError> {
    trace!("Executing native 'rest' function");
    check_arity("rest", &args, 1)?;
    match &args[0] {
        Object::Array(elements) => match elements.split_first() {
            Some((_, tail)) => Ok(Object::Array(tail.into())),
            None => Ok(Object::Null),
        },
        Object::String(value) => {
            let mut chars = value.chars();
            match chars.next() {
                Some(_) => Ok(Object::string(chars.as_str())),
                None => Ok(Object::Null),
            }
        }
        other => Err(unsupported("rest", other)),
    }
}

/// Returns a new array with the second argument appended. The input array is
/// left untouched.
#[instrument(skip(args, _out), ret, err)]
pub fn native_push(args: Vec<Object>, _out: &mut dyn Write) -> Result<Object, BuiltinError> {
    trace!("Executing native 'push' function");
    let [target, value]: [Object; 2] = match args.try_into() {
        Ok(pair) => pair,
        Err(args) => {
            // `push` has always reported want=1 here; the text is kept as is.
            let arity_error = BuiltinError::WrongArgumentCount {
                got: args.len(),
                want: 1,
            };
            debug!(builtin = "push", error = %arity_error, "Arity error in builtin");
            return Err(arity_error);
        }
    };

    match &target {
        Object::Array(elements) => {
            let mut pushed = Vec::with_capacity(elements.len() + 1);
            pushed.extend_from_slice(elements);
            pushed.push(value);
            Ok(Object::array(pushed))
        }
        other => Err(unsupported("push", other)),
    }
}
