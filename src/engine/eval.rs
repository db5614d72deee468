use crate::engine::ast::{Expr, Statement};
use crate::engine::builtins;
use crate::engine::env::Environment;
use crate::engine::error::EvalError;
use crate::engine::object::Object;
use crate::engine::parser::{ParseError, parse_program};
use std::io::Write;
use tracing::{debug, instrument, trace};

/// Evaluates an expression. Errors are values: the first `Object::Error`
/// produced by a sub-expression is returned without evaluating the rest.
#[instrument(skip(expr, env, out), fields(expr = ?expr), ret)]
pub fn eval(expr: &Expr, env: &mut Environment, out: &mut dyn Write) -> Object {
    trace!("Starting evaluation");
    match expr {
        Expr::Integer(value) => Object::Integer(*value),
        Expr::String(value) => Object::string(value.as_str()),
        Expr::Array(elements) => match eval_all(elements, env, out) {
            Ok(values) => Object::array(values),
            Err(error) => error,
        },
        Expr::Identifier(name) => eval_identifier(name, env),
        Expr::Call {
            function,
            arguments,
        } => {
            let callee = eval(function, env, out);
            if callee.is_error() {
                return callee;
            }
            let args = match eval_all(arguments, env, out) {
                Ok(args) => args,
                Err(error) => return error,
            };
            apply(callee, args, out)
        }
    }
}

// Evaluates left to right, stopping at the first error.
fn eval_all(
    exprs: &[Expr],
    env: &mut Environment,
    out: &mut dyn Write,
) -> Result<Vec<Object>, Object> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval(expr, env, out);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_identifier(name: &str, env: &Environment) -> Object {
    if let Some(value) = env.get(name) {
        return value;
    }
    match builtins::lookup(name) {
        Some(builtin) => {
            debug!(name = %name, "Resolved identifier to builtin");
            builtin
        }
        None => EvalError::IdentifierNotFound(name.to_string()).into(),
    }
}

fn apply(callee: Object, args: Vec<Object>, out: &mut dyn Write) -> Object {
    match callee {
        Object::Builtin(builtin) => {
            debug!(builtin = %builtin.name, argc = args.len(), "Calling builtin");
            builtin.call(args, out)
        }
        other => EvalError::NotAFunction(other.type_name()).into(),
    }
}

/// Runs statements in order. `let` produces no value; the result is the value
/// of the last expression statement, or the first error encountered.
#[instrument(skip(program, env, out))]
pub fn eval_program(
    program: &[Statement],
    env: &mut Environment,
    out: &mut dyn Write,
) -> Option<Object> {
    let mut result = None;
    for statement in program {
        match statement {
            Statement::Let { name, value } => {
                let value = eval(value, env, out);
                if value.is_error() {
                    return Some(value);
                }
                env.define(name.clone(), value);
                result = None;
            }
            Statement::Expression(expr) => {
                let value = eval(expr, env, out);
                if value.is_error() {
                    return Some(value);
                }
                result = Some(value);
            }
        }
    }
    result
}

/// Parses and evaluates `source` against `env`, with `puts` writing to `out`.
#[instrument(skip(source, env, out), fields(source = %source))]
pub fn evaluate_source(
    source: &str,
    env: &mut Environment,
    out: &mut dyn Write,
) -> Result<Option<Object>, ParseError> {
    let program = parse_program(source)?;
    debug!(statements = program.len(), "Parsed program");
    Ok(eval_program(&program, env, out))
}
