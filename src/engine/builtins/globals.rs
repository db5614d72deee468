use crate::engine::builtins::io::native_puts;
use crate::engine::builtins::sequence::{
    native_first, native_last, native_len, native_push, native_rest,
};
use crate::engine::object::{Builtin, BuiltinFn, Object};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

const GLOBAL_NATIVE_FUNCTIONS: &[(&str, BuiltinFn)] = &[
    ("len", native_len),
    ("first", native_first),
    ("last", native_last),
    ("rest", native_rest),
    ("push", native_push),
    ("puts", native_puts),
];

static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    trace!("Populating builtin registry");
    GLOBAL_NATIVE_FUNCTIONS
        .iter()
        .map(|&(name, func)| (name, Builtin { name, func }))
        .collect()
});

/// Resolves a builtin by name. `None` means the identifier is not a builtin.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).copied().map(Object::Builtin)
}

/// Registered builtin names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTINS.keys().copied().collect();
    names.sort_unstable();
    names
}
