//! Runtime values shared by the evaluator and the builtin functions.

use crate::engine::error::BuiltinError;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

/// Type alias for a native Rust function that can be called from Monkey.
/// It takes the already-evaluated arguments and the output sink, and reports
/// failures through `BuiltinError`; `Builtin::call` turns those into values.
pub type BuiltinFn = fn(Vec<Object>, &mut dyn Write) -> Result<Object, BuiltinError>;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str, // For debugging and identification
    pub func: BuiltinFn,
}

impl Builtin {
    /// Invokes the native function. Always yields exactly one object; a failed
    /// validation comes back as `Object::Error`.
    pub fn call(&self, args: Vec<Object>, out: &mut dyn Write) -> Object {
        (self.func)(args, out).unwrap_or_else(Object::from)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("func", &"<native_fn_ptr>") // Avoid printing function pointer details
            .finish()
    }
}

// Builtin names are unique within the registry.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A runtime value. Strings and arrays are immutable and reference counted,
/// so cloning an `Object` never copies element storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    String(Rc<str>),
    Array(Rc<[Object]>),
    Null,
    Error(String),
    Builtin(Builtin),
}

impl Object {
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Object::String(value.into())
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(elements.into())
    }

    /// Stable type tag used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Null => "NULL",
            Object::Error(_) => "ERROR",
            Object::Builtin(_) => "BUILTIN",
        }
    }

    /// Human-readable rendering, as printed by `puts` and the REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::String(value) => f.write_str(value),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Object::Null => f.write_str("null"),
            Object::Error(message) => write!(f, "ERROR: {}", message),
            Object::Builtin(_) => f.write_str("builtin function"),
        }
    }
}
